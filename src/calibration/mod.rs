// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calibrate theoretical sunsets against one locally-announced time.
//!
//! The solar approximation ignores refraction, elevation and the atmosphere.
//! Rather than modelling those, a single announced time (e.g. "Maariv is at
//! 17:17 on 2025-12-06, 50 minutes after sunset") pins down what sunset really
//! was on that date, and the difference from the theoretical sunset is added
//! to every subsequent sunset. The correction is assumed constant; its error
//! grows with distance from the reference date.

mod error;

pub use error::CalibrationError;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use log::{debug, warn};

use crate::{
    constants::{
        CALIBRATION_REFERENCE_DATE, CALIBRATION_REFERENCE_MINUTES_AFTER_SUNSET,
        CALIBRATION_REFERENCE_TIME,
    },
    solar::Location,
};

/// Formats accepted for an observed local time.
const OBSERVED_TIME_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

/// A locally-announced time for an event a fixed number of minutes after
/// sunset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceObservation {
    pub date: NaiveDate,

    /// Local clock time of the event, e.g. "17:17".
    pub observed_local_time: String,

    pub minutes_after_sunset: i64,
}

impl ReferenceObservation {
    /// The reference observation compiled into `zmanim`.
    pub fn compiled() -> Result<ReferenceObservation, CalibrationError> {
        let (year, month, day) = CALIBRATION_REFERENCE_DATE;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalibrationError::InvalidReferenceDate { year, month, day })?;
        Ok(ReferenceObservation {
            date,
            observed_local_time: CALIBRATION_REFERENCE_TIME.to_string(),
            minutes_after_sunset: CALIBRATION_REFERENCE_MINUTES_AFTER_SUNSET,
        })
    }

    /// The instant of the observed event, interpreting its clock time in `tz`.
    pub fn observed_instant<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Utc>, CalibrationError> {
        let time = parse_observed_time(&self.observed_local_time)?;
        let local = self.date.and_time(time);
        match tz.from_local_datetime(&local) {
            LocalResult::Single(t) => Ok(t.with_timezone(&Utc)),
            // A clock time inside a DST fall-back is taken at its first
            // occurrence.
            LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
            LocalResult::None => Err(CalibrationError::NonexistentLocalTime {
                date: self.date,
                local,
            }),
        }
    }

    /// The sunset implied by the observed event.
    pub fn implied_sunset<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Utc>, CalibrationError> {
        Ok(self.observed_instant(tz)? - Duration::minutes(self.minutes_after_sunset))
    }
}

fn parse_observed_time(s: &str) -> Result<NaiveTime, CalibrationError> {
    let trimmed = s.trim();
    OBSERVED_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(trimmed, f).ok())
        .ok_or_else(|| CalibrationError::UnparseableTime {
            input: s.to_string(),
        })
}

/// Where a [`CalibrationOffset`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetSource {
    /// Calibration was switched off.
    Disabled,

    /// The engine couldn't produce a sunset for the reference date, so no
    /// correction is applied.
    NoReferenceSunset { date: NaiveDate },

    Computed {
        date: NaiveDate,
        theoretical_sunset: DateTime<Utc>,
        implied_sunset: DateTime<Utc>,
    },
}

/// A signed correction added to every theoretical sunset. Computed once per
/// run and then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationOffset {
    offset: Duration,
    source: OffsetSource,
}

impl CalibrationOffset {
    /// An offset that leaves sunsets untouched.
    pub fn disabled() -> CalibrationOffset {
        CalibrationOffset {
            offset: Duration::zero(),
            source: OffsetSource::Disabled,
        }
    }

    /// Derive the offset that makes `engine`'s sunset on the reference date
    /// agree with the sunset implied by `reference`.
    ///
    /// If `enabled` is false, or `engine` can't compute the reference sunset,
    /// the offset is zero. Only a malformed reference is an error.
    pub fn compute<Tz, F>(
        reference: &ReferenceObservation,
        location: &Location,
        tz: &Tz,
        enabled: bool,
        engine: F,
    ) -> Result<CalibrationOffset, CalibrationError>
    where
        Tz: TimeZone,
        F: Fn(NaiveDate, &Location) -> Option<DateTime<Utc>>,
    {
        if !enabled {
            debug!("Sunset calibration is disabled");
            return Ok(CalibrationOffset::disabled());
        }

        let implied_sunset = reference.implied_sunset(tz)?;
        let theoretical_sunset = match engine(reference.date, location) {
            Some(s) => s,
            None => {
                warn!(
                    "No sunset computable on the calibration date {}; sunsets will not be calibrated",
                    reference.date
                );
                return Ok(CalibrationOffset {
                    offset: Duration::zero(),
                    source: OffsetSource::NoReferenceSunset {
                        date: reference.date,
                    },
                });
            }
        };

        let offset = implied_sunset - theoretical_sunset;
        debug!(
            "Calibration on {}: theoretical sunset {theoretical_sunset}, implied sunset {implied_sunset}, offset {}s",
            reference.date,
            offset.num_seconds()
        );
        Ok(CalibrationOffset {
            offset,
            source: OffsetSource::Computed {
                date: reference.date,
                theoretical_sunset,
                implied_sunset,
            },
        })
    }

    pub fn duration(&self) -> Duration {
        self.offset
    }

    pub fn source(&self) -> &OffsetSource {
        &self.source
    }

    /// Calibrate a theoretical sunset. A missing sunset stays missing.
    pub fn apply(&self, theoretical_sunset: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        theoretical_sunset.map(|s| s + self.offset)
    }
}
