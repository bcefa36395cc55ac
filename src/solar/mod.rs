// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sunrise and sunset times from an iterative solar-position approximation.
//!
//! This is not an ephemeris. The numeric literals below are the empirical
//! constants of the approximation and the calibration offset is tuned against
//! exactly this output, so they must not be "improved".


use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use log::trace;
use strum_macros::{Display, EnumIter};

use crate::math::*;

/// A position on the Earth and the solar zenith distance that defines the
/// event of interest there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// [degrees]
    pub latitude: f64,

    /// [degrees], west negative
    pub longitude: f64,

    /// Zenith distance of the sun's centre at the event [degrees]. 90 is the
    /// geometric horizon.
    pub depression_angle: f64,
}

impl Location {
    /// A location with the geometric horizon as its event angle.
    pub fn new(latitude: f64, longitude: f64) -> Location {
        Location {
            latitude,
            longitude,
            depression_angle: 90.0,
        }
    }
}

/// Which horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// The local hour the approximation starts iterating from.
    fn approximate_hour(self) -> f64 {
        match self {
            SolarEvent::Sunrise => 6.0,
            SolarEvent::Sunset => 18.0,
        }
    }
}

/// Get the instant of sunset on `date` at `location`. `None` means the sun
/// doesn't cross the event angle on that date (polar day or night).
pub fn compute_sunset(date: NaiveDate, location: &Location) -> Option<DateTime<Utc>> {
    compute_event(date, location, SolarEvent::Sunset)
}

/// Get the instant of sunrise on `date` at `location`.
pub fn compute_sunrise(date: NaiveDate, location: &Location) -> Option<DateTime<Utc>> {
    compute_event(date, location, SolarEvent::Sunrise)
}

/// Get the instant of `event` on `date` at `location`, rounded to the minute.
pub fn compute_event(
    date: NaiveDate,
    location: &Location,
    event: SolarEvent,
) -> Option<DateTime<Utc>> {
    let ut = event_ut_hours(date, location, event)?;

    // Attach the UT to the calendar date at UTC midnight, rounded to the
    // nearest minute. A value that rounds up to 24:00 rolls over to the next
    // day.
    let minutes = (ut * 60.0).round() as i64;
    let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
    let instant = midnight + Duration::minutes(minutes);
    trace!("{event} on {date}: UT {ut:.4}h -> {instant}");
    Some(instant)
}

/// The UT of `event` on `date` [hours, in [0, 24)], before rounding.
fn event_ut_hours(date: NaiveDate, location: &Location, event: SolarEvent) -> Option<f64> {
    let n = f64::from(date.ordinal());
    let lng_hour = location.longitude / 15.0;
    let t = n + (event.approximate_hour() - lng_hour) / 24.0;

    // Sun's mean anomaly and true longitude.
    let m = 0.9856 * t - 3.289;
    let l = normalise_degrees(m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634);

    // Right ascension, in the same quadrant as L, in hours.
    let ra = normalise_degrees(atan_deg(0.91764 * tan_deg(l)));
    let ra = match_quadrant(ra, l) / 15.0;

    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    let cos_h = (cos_deg(location.depression_angle) - sin_dec * sin_deg(location.latitude))
        / (cos_dec * cos_deg(location.latitude));
    if !(-1.0..=1.0).contains(&cos_h) {
        trace!("{event} on {date}: cos(H) = {cos_h}; no event");
        return None;
    }

    let h = match event {
        SolarEvent::Sunrise => 360.0 - acos_deg(cos_h),
        SolarEvent::Sunset => acos_deg(cos_h),
    } / 15.0;

    let local_mean_time = h + ra - 0.06571 * t - 6.622;
    Some(normalise_hours(local_mean_time - lng_hour))
}
