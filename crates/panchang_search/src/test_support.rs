//! Synthetic providers for unit tests.

use panchang_ephem::{Body, EphemerisError, EphemerisProvider, Place, RiseSetKind, RiseSetResult};
use panchang_math::normalize_360;
use panchang_time::Instant;

/// Reference epoch of [`Linear`].
pub const T0: f64 = 2_460_000.0;

/// Longitudes moving at constant rates from [`T0`]; every rise or set
/// happens at the instant asked about.
pub struct Linear {
    pub sun0: f64,
    pub sun_rate: f64,
    pub moon0: f64,
    pub moon_rate: f64,
}

impl EphemerisProvider for Linear {
    fn sidereal_longitude(&self, body: Body, at: Instant) -> Result<f64, EphemerisError> {
        let dt = at.jd_ut() - T0;
        Ok(match body {
            Body::Sun => normalize_360(self.sun0 + self.sun_rate * dt),
            Body::Moon => normalize_360(self.moon0 + self.moon_rate * dt),
        })
    }

    fn next_rise_set(
        &self,
        _body: Body,
        _kind: RiseSetKind,
        after: Instant,
        _place: &Place,
    ) -> Result<RiseSetResult, EphemerisError> {
        Ok(RiseSetResult::Event(after))
    }
}

pub fn t0() -> Instant {
    Instant::from_jd_ut(T0)
}

/// A place on the Universal clock.
pub fn utc() -> Place {
    Place {
        latitude_deg: 0.0,
        longitude_deg: 0.0,
        altitude_m: 0.0,
        utc_offset_hours: 0.0,
    }
}
