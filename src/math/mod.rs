// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics. The solar approximation is written entirely in
//! degrees, so these wrap the radian-based std functions.


// Make traditional trigonometry possible, in degrees.
/// Sine of an angle in degrees.
///
/// # Examples
///
/// `assert_abs_diff_eq!(sin_deg(30.0), 0.5);`
#[inline]
pub(crate) fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

/// Cosine of an angle in degrees.
///
/// # Examples
///
/// `assert_abs_diff_eq!(cos_deg(60.0), 0.5);`
#[inline]
pub(crate) fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Tangent of an angle in degrees.
#[inline]
pub(crate) fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

/// Inverse sine, in degrees.
#[inline]
pub(crate) fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Inverse cosine, in degrees.
#[inline]
pub(crate) fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Inverse tangent, in degrees. Single argument; the caller is responsible for
/// putting the result in the right quadrant.
#[inline]
pub(crate) fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Wrap an angle into [0, 360).
#[inline]
pub(crate) fn normalise_degrees(x: f64) -> f64 {
    let r = x.rem_euclid(360.0);
    // rem_euclid can round up to exactly the modulus for tiny negative inputs.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Wrap an hour count into [0, 24).
#[inline]
pub(crate) fn normalise_hours(x: f64) -> f64 {
    let r = x.rem_euclid(24.0);
    if r >= 24.0 {
        0.0
    } else {
        r
    }
}

/// Move `ra` [degrees] into the same 90-degree quadrant as `l` [degrees]. Both
/// must already be in [0, 360).
#[inline]
pub(crate) fn match_quadrant(ra: f64, l: f64) -> f64 {
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra + (l_quadrant - ra_quadrant)
}
