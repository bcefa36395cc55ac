// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Calibrated Mincha and Maariv times for a shul's weekly board.

Sunsets come from an iterative solar approximation, corrected by a constant
offset derived from one locally-announced time. The weekday and Shabbos
schedules are built from calibrated sunsets, and published with the week's
Torah reading to named display slots.
 */

pub mod calendar;
pub mod calibration;
mod cli;
pub mod constants;
pub(crate) mod math;
pub mod presentation;
pub mod schedule;
pub mod solar;

// Re-exports.
pub use calibration::{CalibrationOffset, ReferenceObservation};
pub use cli::{Zmanim, ZmanimError};
pub use presentation::{Board, DisplaySlot, DisplaySurface};
pub use schedule::{PrayerEvent, PrayerTimes, ShabbosSchedule, WeekdaySchedule};
pub use solar::{compute_sunrise, compute_sunset, Location};
