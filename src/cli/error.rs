// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all zmanim-related errors. This should be the *only* error
//! enum that is publicly visible.

use thiserror::Error;

use crate::{calendar::CalendarError, calibration::CalibrationError};

/// The *only* publicly visible error from zmanim. Schedules that can't be
/// computed aren't errors; they show fallback text instead.
#[derive(Error, Debug)]
pub enum ZmanimError {
    /// The compiled-in calibration reference is unusable.
    #[error("{0}\n\nThe calibration reference is compiled in; check the constants module")]
    Calibration(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// Bad command-line arguments.
    #[error("{0}")]
    InvalidArgs(String),

    /// The calendar client couldn't be set up.
    #[error("{0}")]
    Calendar(String),

    /// Reading an argument file or writing the board failed.
    #[error("{0}")]
    Io(String),

    /// An error that doesn't fit anywhere else.
    #[error("{0}")]
    Generic(String),
}

impl From<CalibrationError> for ZmanimError {
    fn from(e: CalibrationError) -> Self {
        Self::Calibration(e.to_string())
    }
}

impl From<CalendarError> for ZmanimError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e.to_string())
    }
}

impl From<std::io::Error> for ZmanimError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ZmanimError {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(e.to_string())
    }
}
