//! The narrow interface the calendar engine consumes.

use panchang_math::normalize_360;
use panchang_time::Instant;
use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;
use crate::riseset_types::{Place, RiseSetKind, RiseSetResult};

/// The two bodies a panchang needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
}

/// Source of sidereal longitudes and rise/set instants.
///
/// Implementations fix their sidereal frame at construction and must be
/// safe for concurrent reads; the engine never mutates a provider.
pub trait EphemerisProvider: Send + Sync {
    /// Sidereal ecliptic longitude of `body` in degrees, [0, 360).
    fn sidereal_longitude(&self, body: Body, at: Instant) -> Result<f64, EphemerisError>;

    /// First rise or set of `body` at or after `after`, as seen from `place`.
    fn next_rise_set(
        &self,
        body: Body,
        kind: RiseSetKind,
        after: Instant,
        place: &Place,
    ) -> Result<RiseSetResult, EphemerisError>;

    /// Moon minus Sun, in degrees [0, 360). 0 at new moon, 180 at full.
    fn lunar_phase(&self, at: Instant) -> Result<f64, EphemerisError> {
        let moon = self.sidereal_longitude(Body::Moon, at)?;
        let sun = self.sidereal_longitude(Body::Sun, at)?;
        Ok(normalize_360(moon - sun))
    }

    fn next_sunrise(&self, after: Instant, place: &Place) -> Result<RiseSetResult, EphemerisError> {
        self.next_rise_set(Body::Sun, RiseSetKind::Rise, after, place)
    }

    fn next_sunset(&self, after: Instant, place: &Place) -> Result<RiseSetResult, EphemerisError> {
        self.next_rise_set(Body::Sun, RiseSetKind::Set, after, place)
    }

    fn next_moonrise(&self, after: Instant, place: &Place) -> Result<RiseSetResult, EphemerisError> {
        self.next_rise_set(Body::Moon, RiseSetKind::Rise, after, place)
    }

    fn next_moonset(&self, after: Instant, place: &Place) -> Result<RiseSetResult, EphemerisError> {
        self.next_rise_set(Body::Moon, RiseSetKind::Set, after, place)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn sidereal_longitude(&self, body: Body, at: Instant) -> Result<f64, EphemerisError> {
        (**self).sidereal_longitude(body, at)
    }

    fn next_rise_set(
        &self,
        body: Body,
        kind: RiseSetKind,
        after: Instant,
        place: &Place,
    ) -> Result<RiseSetResult, EphemerisError> {
        (**self).next_rise_set(body, kind, after, place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        sun: f64,
        moon: f64,
    }

    impl EphemerisProvider for Fixed {
        fn sidereal_longitude(&self, body: Body, _at: Instant) -> Result<f64, EphemerisError> {
            Ok(match body {
                Body::Sun => self.sun,
                Body::Moon => self.moon,
            })
        }

        fn next_rise_set(
            &self,
            _body: Body,
            kind: RiseSetKind,
            after: Instant,
            _place: &Place,
        ) -> Result<RiseSetResult, EphemerisError> {
            let offset = if kind.is_rising() { 0.25 } else { 0.75 };
            Ok(RiseSetResult::Event(after.add_days(offset)))
        }
    }

    #[test]
    fn phase_wraps() {
        let p = Fixed { sun: 350.0, moon: 10.0 };
        let phase = p.lunar_phase(Instant::from_jd_ut(2_460_000.0)).unwrap();
        assert!((phase - 20.0).abs() < 1e-12, "phase = {phase}");
    }

    #[test]
    fn helpers_forward_kind() {
        let p = Fixed { sun: 0.0, moon: 0.0 };
        let place = Place::new(0.0, 0.0, 0.0).unwrap();
        let t = Instant::from_jd_ut(2_460_000.0);
        let rise = p.next_sunrise(t, &place).unwrap().event().unwrap();
        let set = p.next_moonset(t, &place).unwrap().event().unwrap();
        assert!((rise.days_since(t) - 0.25).abs() < 1e-12);
        assert!((set.days_since(t) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn usable_through_reference_and_dyn() {
        let p = Fixed { sun: 10.0, moon: 40.0 };
        let dynamic: &dyn EphemerisProvider = &p;
        let phase = (&dynamic).lunar_phase(Instant::from_jd_ut(0.0)).unwrap();
        assert!((phase - 30.0).abs() < 1e-12);
    }
}
