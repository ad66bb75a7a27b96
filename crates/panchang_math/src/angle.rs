//! Angle normalization, sexagesimal conversion and unwrapping.
//!
//! Every function here is total over finite input. Angles are in degrees;
//! [`to_dms`] works equally for hours, since the split is purely base-60.

use std::fmt::{Display, Formatter};

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Fold an angle already in [0, 360) onto [-180, 180).
///
/// `a - 360` when `a >= 180`, otherwise `a` unchanged. Values below 0 are
/// passed through as-is, so signed deviations near 0 stay signed.
pub fn normalize_180(deg: f64) -> f64 {
    if deg >= 180.0 { deg - 360.0 } else { deg }
}

/// A truncated sexagesimal split: whole units, minutes and seconds.
///
/// Used for both arc (degrees) and time (hours).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dms {
    /// True when the source value was negative.
    pub negative: bool,
    /// Whole units (degrees or hours).
    pub units: u32,
    /// Minutes, 0-59.
    pub minutes: u8,
    /// Whole seconds, 0-59. The sub-second fraction is dropped.
    pub seconds: u8,
}

impl Dms {
    /// Reassemble the decimal value. Differs from the source by < 1 second.
    pub fn to_decimal(self) -> f64 {
        let magnitude =
            self.units as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0;
        if self.negative { -magnitude } else { magnitude }
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{:02}:{:02}:{:02}",
            self.units, self.minutes, self.seconds
        )
    }
}

/// Split a decimal value into whole units, minutes and seconds.
///
/// Each component is truncated. Seconds are first rounded to the
/// microsecond so that values like `x.999_999_999_9` do not print as
/// `59.999…` seconds; a resulting 60 carries into the minutes.
pub fn to_dms(value: f64) -> Dms {
    let negative = value < 0.0;
    let v = value.abs();
    let mut units = v.trunc() as u32;
    let minutes_f = (v - units as f64) * 60.0;
    let mut minutes = minutes_f.trunc() as u32;
    let seconds_f = ((minutes_f - minutes as f64) * 60.0 * 1e6).round() / 1e6;
    let mut seconds = seconds_f.trunc() as u32;

    if seconds >= 60 {
        seconds -= 60;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        units += 1;
    }

    Dms {
        negative,
        units,
        minutes: minutes as u8,
        seconds: seconds as u8,
    }
}

/// Unwrap a sampled angle series in place so it is non-decreasing.
///
/// Adds 360 to any element smaller than its (already unwrapped)
/// predecessor. Needed before interpolating an angle that crosses the
/// 360 -> 0 seam inside the sample window.
pub fn unwrap_ascending(series: &mut [f64]) {
    for i in 1..series.len() {
        if series[i] < series[i - 1] {
            series[i] += 360.0;
        }
    }
}

/// Owned variant of [`unwrap_ascending`].
pub fn unwrapped(series: &[f64]) -> Vec<f64> {
    let mut out = series.to_vec();
    unwrap_ascending(&mut out);
    out
}
