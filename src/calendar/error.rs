// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from looking up the week's reading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Couldn't set up the HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Request to the calendar service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The calendar service responded with HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("Couldn't decode the calendar service's response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The calendar service's response has no 'parashat' item")]
    NoReading,

    #[error("The calendar service's 'parashat' item has no name")]
    UnnamedReading,

    #[error("The calendar lookup was skipped")]
    Skipped,
}
