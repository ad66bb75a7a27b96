//! ΔT = TT − UT, in seconds.
//!
//! Polynomial fits of Espenak & Meeus (NASA Five Millennium Canon), used
//! from 1900 onward, with the long-term parabola outside that range.

use crate::julian::J2000_JD;

const DAYS_PER_YEAR: f64 = 365.25;

/// ΔT in seconds for a Universal Julian Date.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    delta_t_for_year(2000.0 + (jd_ut - J2000_JD) / DAYS_PER_YEAR)
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_for_year(y: f64) -> f64 {
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };

    if y < 1900.0 {
        long_term(y)
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + t * (1.494119 + t * (-0.0598939 + t * (0.0061966 + t * -0.000197)))
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + t * (0.84493 + t * (-0.0761 + t * 0.0020936))
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86
            + t * (0.3345 + t * (-0.060374 + t * (0.0017275 + t * (0.000651814 + t * 0.00002373599))))
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000() {
        let dt = delta_t_for_year(2000.0);
        assert!((dt - 63.86).abs() < 1e-9, "ΔT = {dt}");
    }

    #[test]
    fn recent_years_in_observed_range() {
        for y in [2010.0, 2020.0, 2024.5] {
            let dt = delta_t_for_year(y);
            assert!((65.0..75.0).contains(&dt), "year {y}: ΔT = {dt}");
        }
    }

    #[test]
    fn continuous_at_2050() {
        let before = delta_t_for_year(2050.0 - 1e-9);
        let after = delta_t_for_year(2050.0);
        assert!((before - after).abs() < 2.0, "{before} vs {after}");
    }

    #[test]
    fn from_julian_date() {
        let dt = delta_t_seconds(J2000_JD);
        assert!((dt - 63.86).abs() < 0.01);
    }
}
