// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from composing prayer schedules.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("No sunset could be computed for any weekday (Sunday to Thursday) of the week starting {week_start}")]
    NoWeekdaySunset { week_start: NaiveDate },

    #[error("No sunset could be computed for Shabbos on {date}")]
    NoShabbosSunset { date: NaiveDate },
}
