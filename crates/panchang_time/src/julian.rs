//! Julian Date ↔ proleptic Gregorian calendar.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date for a Gregorian calendar date with fractional day.
///
/// `day_frac` = day of month plus fraction (e.g. 1.5 = noon on the 1st).
/// The Gregorian rule is applied to every date (proleptic).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Gregorian calendar date for a Julian Date.
///
/// Returns `(year, month, day_frac)` with the time of day folded into the
/// fractional day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Split a Julian Date into a calendar day and seconds into that day.
///
/// Seconds are rounded to a multiple of `resolution_s`; a rounded value of
/// a full day rolls over to the next date.
pub(crate) fn split_day(jd: f64, resolution_s: f64) -> (i32, u32, u32, f64) {
    let shifted = jd + 0.5;
    let mut day_number = shifted.floor();
    let mut seconds = ((shifted - day_number) * SECONDS_PER_DAY / resolution_s).round() * resolution_s;
    if seconds >= SECONDS_PER_DAY {
        day_number += 1.0;
        seconds -= SECONDS_PER_DAY;
    }
    let (year, month, day) = jd_to_calendar(day_number - 0.5);
    (year, month, day.round() as u32, seconds)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 Oct 4.81 = JD 2436116.31
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn january_february_shift() {
        // 2024-02-29 0h
        assert!((calendar_to_jd(2024, 2, 29.0) - 2_460_369.5).abs() < 1e-9);
    }

    #[test]
    fn round_trip() {
        let jd = 2_460_318.5 + 0.2345;
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2026, 1));
        assert!((calendar_to_jd(y, m, d) - jd).abs() < 1e-9);
    }

    #[test]
    fn calendar_of_midnight() {
        let (y, m, d) = jd_to_calendar(2_460_000.5);
        assert_eq!((y, m), (2023, 2));
        assert!((d - 25.0).abs() < 1e-9, "day = {d}");
    }

    #[test]
    fn split_day_rolls_over() {
        // 23:59:59.9996 rounds to the next midnight at 1 s resolution.
        let jd = 2_460_000.5 - 0.0004 / SECONDS_PER_DAY;
        let (y, m, d, s) = split_day(jd, 1.0);
        assert_eq!((y, m, d), (2023, 2, 25));
        assert_eq!(s, 0.0);
    }

    #[test]
    fn split_day_afternoon() {
        let (y, m, d, s) = split_day(2_460_000.5 + 0.75, 1.0);
        assert_eq!((y, m, d), (2023, 2, 25));
        assert!((s - 64_800.0).abs() < 1e-9);
    }

    #[test]
    fn centuries() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }
}
