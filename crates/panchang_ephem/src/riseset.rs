//! Rise/set computation for the Sun and Moon.
//!
//! Iterative algorithm based on standard spherical astronomy formulas
//! (Meeus ch. 15, Montenbruck & Pfleger). From an approximate local noon
//! the body's transit is located, offset by the hour angle at which its
//! altitude equals the target, and refined against fresh positions until
//! the hour-angle residual drops below [`CONVERGENCE_DAYS`].

use std::f64::consts::{PI, TAU};

use panchang_time::{Instant, SIDEREAL_RATE_RAD_PER_DAY, hour_angle_rad};
use tracing::{trace, warn};

use crate::error::EphemerisError;
use crate::provider::Body;
use crate::riseset_types::{Place, RiseSetKind, RiseSetResult};

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Apparent place of a body and the altitude it must reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonState {
    /// Apparent right ascension, radians.
    pub ra_rad: f64,
    /// Apparent declination, radians.
    pub dec_rad: f64,
    /// Altitude of the body's centre at the event, degrees.
    pub target_altitude_deg: f64,
}

/// Mean rate at which the body's hour angle grows, in radians per day.
pub fn hour_angle_rate(body: Body) -> f64 {
    match body {
        // one solar day per revolution
        Body::Sun => TAU,
        // sidereal rate less ~13.18°/day of eastward motion
        Body::Moon => SIDEREAL_RATE_RAD_PER_DAY - 13.176_396_f64.to_radians(),
    }
}

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn cos_hour_angle(state: &HorizonState, phi: f64) -> f64 {
    let h0 = state.target_altitude_deg.to_radians();
    (h0.sin() - phi.sin() * state.dec_rad.sin()) / (phi.cos() * state.dec_rad.cos())
}

fn wrap_pi(x: f64) -> f64 {
    let r = (x + PI).rem_euclid(TAU) - PI;
    if r >= PI { r - TAU } else { r }
}

/// Compute the rise or set nearest the transit that follows `jd_ut_noon`.
///
/// `state_at` returns the body's apparent place at a Universal JD.
pub fn compute_rise_set<F>(
    mut state_at: F,
    place: &Place,
    kind: RiseSetKind,
    jd_ut_noon: f64,
    rate: f64,
) -> Result<RiseSetResult, EphemerisError>
where
    F: FnMut(f64) -> Result<HorizonState, EphemerisError>,
{
    let phi = place.latitude_rad();
    let lon = place.longitude_deg;

    let noon_state = state_at(jd_ut_noon)?;
    let cos_h0 = cos_hour_angle(&noon_state, phi);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    // Transit (HA = 0), then step off by the event hour angle.
    let ha_noon = hour_angle_rad(jd_ut_noon, lon, noon_state.ra_rad);
    let jd_transit = jd_ut_noon - ha_noon / rate;
    let h0_days = cos_h0.acos() / rate;
    let mut jd_event = if kind.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for iteration in 0..MAX_ITERATIONS {
        let state = state_at(jd_event)?;
        let cos_h = cos_hour_angle(&state, phi);
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h.acos();
        let ha_target = if kind.is_rising() { -h_target } else { h_target };
        let ha_actual = hour_angle_rad(jd_event, lon, state.ra_rad);

        let correction = wrap_pi(ha_target - ha_actual) / rate;
        jd_event += correction;
        trace!(iteration, jd_event, correction, "rise/set refinement");

        if correction.abs() < CONVERGENCE_DAYS {
            return Ok(RiseSetResult::Event(Instant::from_jd_ut(jd_event)));
        }
    }

    warn!(jd_event, "rise/set refinement hit iteration cap");
    Ok(RiseSetResult::Event(Instant::from_jd_ut(jd_event)))
}

/// First rise or set at or after `after`.
///
/// Solves for the events belonging to the local days around `after` and
/// keeps the earliest one not before it. If no day in the window has an
/// event, the circumpolar state of the day containing `after` is returned.
pub fn next_rise_set_after<F>(
    mut state_at: F,
    place: &Place,
    kind: RiseSetKind,
    after: Instant,
    rate: f64,
) -> Result<RiseSetResult, EphemerisError>
where
    F: FnMut(f64) -> Result<HorizonState, EphemerisError>,
{
    // Events stay within ~1.1 days of their anchoring noon.
    const SPREAD_DAYS: f64 = 1.1;

    let jd_midnight = (after.jd_ut() - 0.5).floor() + 0.5;
    let mut best: Option<f64> = None;
    let mut circumpolar: Option<RiseSetResult> = None;

    for k in -1..=3 {
        let noon = approximate_local_noon_jd(jd_midnight + k as f64, place.longitude_deg);
        if best.is_some_and(|b| b < noon - SPREAD_DAYS) {
            break;
        }
        match compute_rise_set(&mut state_at, place, kind, noon, rate)? {
            RiseSetResult::Event(t) => {
                if t.jd_ut() >= after.jd_ut() && best.is_none_or(|b| t.jd_ut() < b) {
                    best = Some(t.jd_ut());
                }
            }
            other => {
                if k >= 0 && circumpolar.is_none() {
                    circumpolar = Some(other);
                }
            }
        }
    }

    match (best, circumpolar) {
        (Some(jd), _) => Ok(RiseSetResult::Event(Instant::from_jd_ut(jd))),
        (None, Some(state)) => Ok(state),
        (None, None) => Err(EphemerisError::NoConvergence("no horizon crossing in window")),
    }
}
