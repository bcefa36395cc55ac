// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

Everything here is fixed when `zmanim` is compiled. Runtime options can change
which date is evaluated and where results go, but never the location or the
calibration reference.
 */

use crate::solar::Location;

/// Latitude of the shul [degrees].
pub const SHUL_LAT_DEG: f64 = 41.19392515448243;

/// Longitude of the shul [degrees]. West is negative.
pub const SHUL_LONG_DEG: f64 = -74.02504208449552;

/// The zenith distance of the sun's centre at sunset [degrees]. 90 is the
/// geometric horizon; refraction and elevation are absorbed by the calibration
/// offset instead.
pub const SUNSET_ZENITH_DEG: f64 = 90.0;

/// The location used for all sunset calculations.
pub const SHUL_LOCATION: Location = Location {
    latitude: SHUL_LAT_DEG,
    longitude: SHUL_LONG_DEG,
    depression_angle: SUNSET_ZENITH_DEG,
};

/// If false, the calibration offset is always zero.
pub const CALIBRATION_ENABLED: bool = true;

/// The date of the announced time used to calibrate sunsets.
pub const CALIBRATION_REFERENCE_DATE: (i32, u32, u32) = (2025, 12, 6);

/// The announced local time of Maariv on the reference date.
pub const CALIBRATION_REFERENCE_TIME: &str = "17:17";

/// How many minutes after sunset the announced event on the reference date
/// takes place.
pub const CALIBRATION_REFERENCE_MINUTES_AFTER_SUNSET: i64 = 50;

/// Weekday Mincha/Maariv and erev Shabbos Mincha are this many minutes before
/// sunset.
pub const MINCHA_MINUTES_BEFORE_SUNSET: i64 = 15;

/// Shabbos day Mincha is this many minutes before sunset.
pub const SHABBOS_MINCHA_MINUTES_BEFORE_SUNSET: i64 = 45;

/// Motzaei Shabbos Maariv is this many minutes after sunset. Also used as the
/// havdalah offset when asking the calendar service for the week's reading.
pub const MAARIV_MINUTES_AFTER_SUNSET: i64 = 50;

/// From this local hour on a Saturday, "this Shabbos" means next week's.
pub const SHABBOS_EVENING_HOUR: u32 = 18;

/// Displayed when no weekday sunset could be computed.
pub const WEEKDAY_FALLBACK: &str = "Check shul board";

/// Displayed when the Shabbos sunset could not be computed.
pub const SHABBOS_FALLBACK: &str = "See local listing";

/// Displayed when the week's reading couldn't be determined.
pub const READING_FALLBACK: &str = "—";

/// The calendar service's weekly endpoint. The location and havdalah offset are
/// given as query parameters.
pub const CALENDAR_BASE_URL: &str = "https://www.hebcal.com/shabbat";

/// The category of the calendar item carrying the week's reading.
pub const READING_CATEGORY: &str = "parashat";
