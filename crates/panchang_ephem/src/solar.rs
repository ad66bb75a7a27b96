//! Geocentric position of the Sun.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25, the
//! low-accuracy method: about 0.01° in longitude.

use panchang_math::normalize_360;

/// Ecliptic position of the Sun referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Geometric (true) longitude in degrees, [0, 360).
    pub true_longitude_deg: f64,
    /// Earth–Sun distance in AU.
    pub distance_au: f64,
}

impl SolarPosition {
    /// Longitude with annual aberration (−20.4898″ / R) applied, in degrees.
    pub fn aberrated_longitude_deg(&self) -> f64 {
        normalize_360(self.true_longitude_deg - 0.005_691_611 / self.distance_au)
    }
}

/// Sun position at `t` Julian centuries (TT) since J2000.0.
pub fn solar_position(t: f64) -> SolarPosition {
    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m = (357.52911 + t * (35999.05029 - t * 0.0001537)).to_radians();
    let e = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_anomaly = m + c.to_radians();
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    SolarPosition {
        true_longitude_deg: normalize_360(l0 + c),
        distance_au,
    }
}
