// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Compute everything the board shows and show it.

#[cfg(test)]
mod tests;

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use clap::Parser;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::common::{resolve_now, InfoPrinter, ARG_FILE_HELP};
use crate::{
    calendar::{calendar_url, CalendarClient, CalendarError},
    calibration::CalibrationOffset,
    constants::{MAARIV_MINUTES_AFTER_SUNSET, SHUL_LOCATION},
    presentation::{
        format_clock, publish_reading, publish_shabbos, publish_weekday, publish_year, Board,
    },
    schedule::{
        compute_shabbos_schedule, compute_weekday_schedule, CalibratedSunsets, PrayerEvent,
        PrayerTimes,
    },
    ZmanimError,
};

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct ShowArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    #[serde(skip)]
    pub(super) args_file: Option<PathBuf>,

    /// Pretend that today is this date (YYYY-MM-DD, local time). Without
    /// --time, the time of day is midday.
    #[clap(long, help_heading = "NOW")]
    pub(super) date: Option<String>,

    /// Pretend that it's this local time of day (HH:MM). Without --date, the
    /// date is today.
    #[clap(long, help_heading = "NOW")]
    pub(super) time: Option<String>,

    /// Don't ask the calendar service for this week's reading.
    #[clap(long, help_heading = "OUTPUT")]
    #[serde(default)]
    pub(super) no_calendar: bool,

    /// Also write the board's slots to this JSON file.
    #[clap(short, long, parse(from_os_str), help_heading = "OUTPUT")]
    pub(super) output: Option<PathBuf>,
}

impl ShowArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified
    /// into a single struct. Where applicable, it will prefer CLI parameters
    /// over those in the file.
    pub(super) fn merge(self) -> Result<ShowArgs, ZmanimError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let ShowArgs {
                args_file: _,
                date,
                time,
                no_calendar,
                output,
            } = unpack_arg_file!(arg_file);

            Ok(ShowArgs {
                args_file: None,
                date: cli_args.date.or(date),
                time: cli_args.time.or(time),
                no_calendar: cli_args.no_calendar || no_calendar,
                output: cli_args.output.or(output),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse<Tz: TimeZone>(self, tz: &Tz) -> Result<ShowParams<Tz>, ZmanimError> {
        debug!("{:#?}", self);

        let ShowArgs {
            args_file: _,
            date,
            time,
            no_calendar,
            output,
        } = self;

        let now = resolve_now(tz, date.as_deref(), time.as_deref())?;
        let calendar = if no_calendar {
            debug!("Not asking the calendar service for the reading");
            None
        } else {
            Some(CalendarClient::new(calendar_url(
                &SHUL_LOCATION,
                MAARIV_MINUTES_AFTER_SUNSET,
            ))?)
        };

        Ok(ShowParams {
            now,
            calendar,
            output,
        })
    }

    pub(super) fn run(self, offset: &CalibrationOffset) -> Result<(), ZmanimError> {
        self.parse(&Local)?.run(offset)
    }
}

struct ShowParams<Tz: TimeZone> {
    now: DateTime<Tz>,
    calendar: Option<CalendarClient>,
    output: Option<PathBuf>,
}

impl<Tz> ShowParams<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn run(self, offset: &CalibrationOffset) -> Result<(), ZmanimError> {
        let ShowParams {
            now,
            calendar,
            output,
        } = self;
        info!("Computing times for {}", now.format("%A %Y-%m-%d %H:%M"));

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let refresh = runtime.block_on(refresh(&now, offset, calendar.as_ref()));

        let mut printer = InfoPrinter::new("Prayer times".into());
        for line in refresh.summary(&now.timezone()) {
            printer.push_line(line.into());
        }
        printer.display();

        let mut printer = InfoPrinter::new("Board".into());
        for (slot, text) in refresh.board.entries() {
            printer.push_line(format!("{slot}: {}", text.unwrap_or("")).into());
        }
        printer.display();

        if let Some(output) = output {
            let mut f = BufWriter::new(File::create(&output)?);
            refresh.board.write_json(&mut f)?;
            writeln!(f)?;
            f.flush()?;
            info!("Wrote the board to {}", output.display());
        }

        Ok(())
    }
}

/// Everything computed for one refresh of the board.
struct Refresh {
    board: Board,
    times: PrayerTimes,
    week_start: Option<NaiveDate>,
    shabbos: Option<NaiveDate>,
}

impl Refresh {
    /// One line per prayer time. Each is labelled with the week or Shabbos it
    /// belongs to; a sunset instant's own local date can be a day early.
    fn summary<Tz>(&self, tz: &Tz) -> Vec<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if self.times.is_empty() {
            return vec!["None could be computed".to_string()];
        }
        self.times
            .iter()
            .map(|(event, instant)| {
                let label = match event {
                    PrayerEvent::WeekdayMinchaMaariv => {
                        self.week_start.map(|d| format!("week of {d}"))
                    }
                    _ => self.shabbos.map(|d| format!("Shabbos {d}")),
                }
                .unwrap_or_default();
                format!("{event} ({label}): {}", format_clock(&instant, tz))
            })
            .collect()
    }
}

/// Compute both schedules and look up the reading concurrently, then publish
/// the results. Each part falls back independently of the others.
async fn refresh<Tz>(
    now: &DateTime<Tz>,
    offset: &CalibrationOffset,
    calendar: Option<&CalendarClient>,
) -> Refresh
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let sunsets = CalibratedSunsets::new(SHUL_LOCATION, offset);
    let tz = now.timezone();

    let weekday = async { compute_weekday_schedule(now.date_naive(), &tz, &sunsets) };
    let shabbos = async { compute_shabbos_schedule(now, &sunsets) };
    let reading = async {
        match calendar {
            Some(c) => c.fetch_reading().await,
            None => Err(CalendarError::Skipped),
        }
    };
    let (weekday, shabbos, reading) = tokio::join!(weekday, shabbos, reading);

    let mut board = Board::new();
    publish_weekday(&mut board, &weekday, &tz);
    publish_shabbos(&mut board, &shabbos, &tz);
    publish_reading(&mut board, &reading);
    publish_year(&mut board, now.year());

    let weekday = weekday.ok();
    let shabbos = shabbos.ok();
    Refresh {
        board,
        times: PrayerTimes::new(weekday.as_ref(), shabbos.as_ref()),
        week_start: weekday.map(|w| w.week_start),
        shabbos: shabbos.map(|s| s.date),
    }
}
