// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all calibration-related errors.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("The calibration reference date {year}-{month:02}-{day:02} is not a valid date")]
    InvalidReferenceDate { year: i32, month: u32, day: u32 },

    #[error("Could not parse the observed time '{input}'; expected e.g. '17:17' or '5:17 PM'")]
    UnparseableTime { input: String },

    #[error("The observed time {local} on {date} doesn't exist in the local timezone")]
    NonexistentLocalTime { date: NaiveDate, local: NaiveDateTime },
}
