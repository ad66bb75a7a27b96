//! Sidereal time for hour-angle computations.
//!
//! Inputs are Universal Julian Dates. The ~0.9 s UT1−UTC difference is
//! below the resolution of any panchang boundary, so UT stands in for UT1.
//!
//! GMST = Earth Rotation Angle (IERS 2010, Eq. 5.15) plus the precession
//! polynomial of Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{J2000_JD, jd_to_centuries};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Sidereal radians swept per Universal day.
pub const SIDEREAL_RATE_RAD_PER_DAY: f64 = TAU * 1.002_737_811_911_354_6;

fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich mean sidereal time in radians, [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * -0.0000000368))));
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local mean sidereal time in radians, [0, 2π).
///
/// `longitude_east_deg` is positive east of Greenwich.
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_deg.to_radians()).rem_euclid(TAU)
}

/// Local hour angle of a body with right ascension `ra_rad`, in [-π, π).
pub fn hour_angle_rad(jd_ut: f64, longitude_east_deg: f64, ra_rad: f64) -> f64 {
    let h = (local_sidereal_time_rad(jd_ut, longitude_east_deg) - ra_rad).rem_euclid(TAU);
    if h >= PI { h - TAU } else { h }
}
