// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turn calibrated sunsets into weekday and Shabbos prayer times.
//!
//! Weekday Mincha/Maariv is a single time for the whole week, taken from the
//! *earliest* sunset of Sunday to Thursday so that it's valid every day. The
//! Shabbos times all hang off the coming Saturday's sunset.
//!
//! The two schedules are independent; either may fail without affecting the
//! other.

mod error;

pub use error::ScheduleError;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use indexmap::IndexMap;
use log::{debug, trace};
use strum_macros::{Display, EnumIter};

use crate::{
    calibration::CalibrationOffset,
    constants::{
        MAARIV_MINUTES_AFTER_SUNSET, MINCHA_MINUTES_BEFORE_SUNSET,
        SHABBOS_EVENING_HOUR, SHABBOS_MINCHA_MINUTES_BEFORE_SUNSET,
    },
    solar::{compute_sunset, Location},
};

/// Number of weekdays considered for weekday Mincha/Maariv (Sunday to
/// Thursday).
const NUM_WEEKDAYS: i64 = 5;

/// Something that can say when sunset is on a given date.
pub trait SunsetSource {
    fn sunset(&self, date: NaiveDate) -> Option<DateTime<Utc>>;
}

/// Theoretical sunsets at a location, corrected by a calibration offset.
pub struct CalibratedSunsets<'a> {
    location: Location,
    offset: &'a CalibrationOffset,
}

impl<'a> CalibratedSunsets<'a> {
    pub fn new(location: Location, offset: &'a CalibrationOffset) -> CalibratedSunsets<'a> {
        CalibratedSunsets { location, offset }
    }
}

impl SunsetSource for CalibratedSunsets<'_> {
    fn sunset(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.offset.apply(compute_sunset(date, &self.location))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdaySchedule {
    /// The Sunday starting the week.
    pub week_start: NaiveDate,

    /// The calibrated sunset of Sunday to Thursday with the earliest clock
    /// time.
    pub earliest_sunset: DateTime<Utc>,

    pub mincha_maariv: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShabbosSchedule {
    /// The Saturday these times are for.
    pub date: NaiveDate,

    pub sunset: DateTime<Utc>,

    /// Friday afternoon Mincha.
    pub erev_mincha: DateTime<Utc>,

    /// Shabbos afternoon Mincha.
    pub day_mincha: DateTime<Utc>,

    /// Motzaei Shabbos Maariv.
    pub maariv: DateTime<Utc>,
}

/// The Sunday that begins `today`'s week.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_sunday()))
}

/// The Saturday whose times should be shown at `now`. On a Saturday from
/// [`SHABBOS_EVENING_HOUR`] onwards, that's next week's.
pub fn upcoming_shabbos<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    let today = now.date_naive();
    let mut days_ahead = (Weekday::Sat.num_days_from_sunday() + 7
        - today.weekday().num_days_from_sunday())
        % 7;
    if days_ahead == 0 && now.hour() >= SHABBOS_EVENING_HOUR {
        days_ahead = 7;
    }
    today + Duration::days(i64::from(days_ahead))
}

/// Weekday Mincha/Maariv for `today`'s week. Sunsets on different days are
/// compared by their clock time in `tz`, as the result is shown as a clock
/// time valid for every day of the week.
pub fn compute_weekday_schedule<Tz: TimeZone, S: SunsetSource>(
    today: NaiveDate,
    tz: &Tz,
    sunsets: &S,
) -> Result<WeekdaySchedule, ScheduleError> {
    let week_start = week_start(today);
    let earliest_sunset = (0..NUM_WEEKDAYS)
        .map(|i| week_start + Duration::days(i))
        .filter_map(|date| {
            let sunset = sunsets.sunset(date);
            match sunset {
                Some(s) => trace!("Calibrated sunset on {date}: {s}"),
                None => debug!("No sunset computable on {date}"),
            }
            sunset
        })
        .min_by_key(|s| s.with_timezone(tz).time())
        .ok_or(ScheduleError::NoWeekdaySunset { week_start })?;

    Ok(WeekdaySchedule {
        week_start,
        earliest_sunset,
        mincha_maariv: earliest_sunset - Duration::minutes(MINCHA_MINUTES_BEFORE_SUNSET),
    })
}

pub fn compute_shabbos_schedule<Tz: TimeZone, S: SunsetSource>(
    now: &DateTime<Tz>,
    sunsets: &S,
) -> Result<ShabbosSchedule, ScheduleError> {
    let date = upcoming_shabbos(now);
    let sunset = sunsets
        .sunset(date)
        .ok_or(ScheduleError::NoShabbosSunset { date })?;
    trace!("Calibrated Shabbos sunset on {date}: {sunset}");

    Ok(ShabbosSchedule {
        date,
        sunset,
        erev_mincha: sunset - Duration::minutes(MINCHA_MINUTES_BEFORE_SUNSET),
        day_mincha: sunset - Duration::minutes(SHABBOS_MINCHA_MINUTES_BEFORE_SUNSET),
        maariv: sunset + Duration::minutes(MAARIV_MINUTES_AFTER_SUNSET),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PrayerEvent {
    #[strum(serialize = "Weekday Mincha/Maariv")]
    WeekdayMinchaMaariv,

    #[strum(serialize = "Erev Shabbos Mincha")]
    ErevShabbosMincha,

    #[strum(serialize = "Shabbos Mincha")]
    ShabbosMincha,

    #[strum(serialize = "Motzaei Shabbos Maariv")]
    MotzaeiShabbosMaariv,
}

/// Named prayer times from whichever schedules succeeded, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerTimes(IndexMap<PrayerEvent, DateTime<Utc>>);

impl PrayerTimes {
    pub fn new(
        weekday: Option<&WeekdaySchedule>,
        shabbos: Option<&ShabbosSchedule>,
    ) -> PrayerTimes {
        let mut map = IndexMap::new();
        if let Some(w) = weekday {
            map.insert(PrayerEvent::WeekdayMinchaMaariv, w.mincha_maariv);
        }
        if let Some(s) = shabbos {
            map.insert(PrayerEvent::ErevShabbosMincha, s.erev_mincha);
            map.insert(PrayerEvent::ShabbosMincha, s.day_mincha);
            map.insert(PrayerEvent::MotzaeiShabbosMaariv, s.maariv);
        }
        PrayerTimes(map)
    }

    pub fn get(&self, event: PrayerEvent) -> Option<DateTime<Utc>> {
        self.0.get(&event).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerEvent, DateTime<Utc>)> + '_ {
        self.0.iter().map(|(e, t)| (*e, *t))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
