// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Print sunrises and sunsets for a run of days.

use std::fmt;

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use clap::Parser;
use log::debug;

use super::common::{parse_date, InfoPrinter, Warn};
use crate::{
    calibration::CalibrationOffset,
    constants::SHUL_LOCATION,
    solar::{compute_sunrise, compute_sunset, Location},
    ZmanimError,
};

const DEFAULT_NUM_DAYS: u32 = 7;

lazy_static::lazy_static! {
    static ref DAYS_HELP: String =
        format!("The number of consecutive days to print. Default: {DEFAULT_NUM_DAYS}");
}

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct SunArgs {
    /// The first date to print (YYYY-MM-DD). The default is today.
    #[clap(long)]
    date: Option<String>,

    #[clap(short = 'n', long, help = DAYS_HELP.as_str())]
    days: Option<u32>,
}

impl SunArgs {
    pub(super) fn run(self, offset: &CalibrationOffset) -> Result<(), ZmanimError> {
        let start = match self.date.as_deref() {
            Some(d) => parse_date(d)?,
            None => Local::now().date_naive(),
        };
        let num_days = self.days.unwrap_or(DEFAULT_NUM_DAYS);
        if num_days == 0 {
            return Err(ZmanimError::InvalidArgs(
                "--days must be at least 1".to_string(),
            ));
        }
        debug!("Printing {num_days} days of sun times from {start}");

        let rows = sun_rows(start, num_days, &SHUL_LOCATION, offset);
        let mut printer = InfoPrinter::new(
            format!(
                "Sun times (local), calibration offset {:+}s",
                offset.duration().num_seconds()
            )
            .into(),
        );
        printer.push_line("date        sunrise   sunset    calibrated".into());
        for row in &rows {
            if row.sunset.is_none() {
                format!("No sunset on {}; the sun doesn't cross the horizon", row.date).warn();
            }
            printer.push_line(row.display(&Local).into());
        }
        printer.display();

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SunRow {
    date: NaiveDate,
    sunrise: Option<DateTime<Utc>>,
    sunset: Option<DateTime<Utc>>,
    calibrated_sunset: Option<DateTime<Utc>>,
}

impl SunRow {
    fn display<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let clock = |t: Option<DateTime<Utc>>| match t {
            Some(t) => t.with_timezone(tz).format("%H:%M").to_string(),
            None => "none".to_string(),
        };
        format!(
            "{}  {:<8}  {:<8}  {}",
            self.date,
            clock(self.sunrise),
            clock(self.sunset),
            clock(self.calibrated_sunset)
        )
    }
}

fn sun_rows(
    start: NaiveDate,
    num_days: u32,
    location: &Location,
    offset: &CalibrationOffset,
) -> Vec<SunRow> {
    (0..i64::from(num_days))
        .map(|i| {
            let date = start + Duration::days(i);
            let sunset = compute_sunset(date, location);
            SunRow {
                date,
                sunrise: compute_sunrise(date, location),
                sunset,
                calibrated_sunset: offset.apply(sunset),
            }
        })
        .collect()
}
