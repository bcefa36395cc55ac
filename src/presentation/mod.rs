// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Show prayer times on named display slots.
//!
//! Every schedule owns a set of slots (its main slots and their "hero" summary
//! variants). Publishing a schedule writes formatted clock times to all of its
//! slots, or its fallback text if the schedule couldn't be computed.


use std::{fmt, io::Write};

use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use log::{debug, log, warn, Level};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    calendar::CalendarError,
    constants::{READING_FALLBACK, SHABBOS_FALLBACK, WEEKDAY_FALLBACK},
    schedule::{ScheduleError, ShabbosSchedule, WeekdaySchedule},
};

/// How clock times are shown, e.g. "5:17 PM".
const CLOCK_FORMAT: &str = "%-I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySlot {
    #[strum(serialize = "Mincha/Maariv (Sun-Thu)")]
    WeekdayMinchaMaariv,

    #[strum(serialize = "Erev Shabbos Mincha")]
    ErevShabbosMincha,

    #[strum(serialize = "Shabbos Mincha")]
    ShabbosMincha,

    #[strum(serialize = "Motzaei Shabbos Maariv")]
    ShabbosMaariv,

    #[strum(serialize = "Weekday Mincha/Maariv (summary)")]
    HeroWeekdayMinchaMaariv,

    #[strum(serialize = "Erev Shabbos Mincha (summary)")]
    HeroErevShabbosMincha,

    #[strum(serialize = "Shabbos Mincha (summary)")]
    HeroShabbosMincha,

    #[strum(serialize = "Motzaei Shabbos Maariv (summary)")]
    HeroShabbosMaariv,

    #[strum(serialize = "Parasha")]
    Reading,

    #[strum(serialize = "Year")]
    CurrentYear,
}

impl DisplaySlot {
    /// The slots that show the weekday schedule.
    pub const WEEKDAY: [DisplaySlot; 2] = [
        DisplaySlot::WeekdayMinchaMaariv,
        DisplaySlot::HeroWeekdayMinchaMaariv,
    ];

    /// The slots that show the Shabbos schedule.
    pub const SHABBOS: [DisplaySlot; 6] = [
        DisplaySlot::ErevShabbosMincha,
        DisplaySlot::HeroErevShabbosMincha,
        DisplaySlot::ShabbosMincha,
        DisplaySlot::HeroShabbosMincha,
        DisplaySlot::ShabbosMaariv,
        DisplaySlot::HeroShabbosMaariv,
    ];
}

/// Something that shows text in named slots.
pub trait DisplaySurface {
    fn write_slot(&mut self, slot: DisplaySlot, text: &str);
}

/// Format an instant as a local clock time, e.g. "5:17 PM".
pub fn format_clock<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(CLOCK_FORMAT).to_string()
}

pub fn publish_weekday<S, Tz>(
    surface: &mut S,
    schedule: &Result<WeekdaySchedule, ScheduleError>,
    tz: &Tz,
) where
    S: DisplaySurface,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let text = match schedule {
        Ok(s) => format_clock(&s.mincha_maariv, tz),
        Err(e) => {
            warn!("{e}; showing '{WEEKDAY_FALLBACK}'");
            WEEKDAY_FALLBACK.to_string()
        }
    };
    for slot in DisplaySlot::WEEKDAY {
        surface.write_slot(slot, &text);
    }
}

pub fn publish_shabbos<S, Tz>(
    surface: &mut S,
    schedule: &Result<ShabbosSchedule, ScheduleError>,
    tz: &Tz,
) where
    S: DisplaySurface,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match schedule {
        Ok(s) => {
            let erev = format_clock(&s.erev_mincha, tz);
            let day = format_clock(&s.day_mincha, tz);
            let maariv = format_clock(&s.maariv, tz);
            surface.write_slot(DisplaySlot::ErevShabbosMincha, &erev);
            surface.write_slot(DisplaySlot::HeroErevShabbosMincha, &erev);
            surface.write_slot(DisplaySlot::ShabbosMincha, &day);
            surface.write_slot(DisplaySlot::HeroShabbosMincha, &day);
            surface.write_slot(DisplaySlot::ShabbosMaariv, &maariv);
            surface.write_slot(DisplaySlot::HeroShabbosMaariv, &maariv);
        }
        Err(e) => {
            warn!("{e}; showing '{SHABBOS_FALLBACK}'");
            for slot in DisplaySlot::SHABBOS {
                surface.write_slot(slot, SHABBOS_FALLBACK);
            }
        }
    }
}

pub fn publish_reading<S: DisplaySurface>(surface: &mut S, reading: &Result<String, CalendarError>) {
    match reading {
        Ok(name) => surface.write_slot(DisplaySlot::Reading, name),
        Err(e) => {
            log!(reading_log_level(e), "Couldn't get this week's reading: {e}");
            surface.write_slot(DisplaySlot::Reading, READING_FALLBACK);
        }
    }
}

/// A lookup the user chose to skip isn't worth a warning.
fn reading_log_level(e: &CalendarError) -> Level {
    match e {
        CalendarError::Skipped => Level::Debug,
        _ => Level::Warn,
    }
}

pub fn publish_year<S: DisplaySurface>(surface: &mut S, year: i32) {
    surface.write_slot(DisplaySlot::CurrentYear, &year.to_string());
}

/// An in-memory display. Slots that were never written are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    slots: IndexMap<DisplaySlot, String>,
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    pub fn get(&self, slot: DisplaySlot) -> Option<&str> {
        self.slots.get(&slot).map(|s| s.as_str())
    }

    /// All slots in their canonical order, with their text if written.
    pub fn entries(&self) -> impl Iterator<Item = (DisplaySlot, Option<&str>)> + '_ {
        DisplaySlot::iter().map(move |slot| (slot, self.get(slot)))
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        let mut ordered = IndexMap::new();
        for (slot, text) in self.entries() {
            if let Some(text) = text {
                ordered.insert(slot, text);
            }
        }
        serde_json::to_writer_pretty(writer, &ordered)
    }
}

impl DisplaySurface for Board {
    fn write_slot(&mut self, slot: DisplaySlot, text: &str) {
        debug!("{slot}: {text}");
        self.slots.insert(slot, text.to_string());
    }
}
