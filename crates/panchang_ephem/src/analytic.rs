//! Built-in provider from analytic Sun and Moon series.

use panchang_math::normalize_360;
use panchang_time::{Instant, jd_to_centuries};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_mean_deg};
use crate::error::EphemerisError;
use crate::lunar::lunar_position;
use crate::nutation::{ecliptic_to_equatorial, mean_obliquity_deg, nutation};
use crate::provider::{Body, EphemerisProvider};
use crate::riseset::{HorizonState, hour_angle_rate, next_rise_set_after};
use crate::riseset_types::{Place, RiseSetConfig, RiseSetKind, RiseSetResult};
use crate::solar::solar_position;

/// First Universal JD served (1800-01-01).
const MIN_JD: f64 = 2_378_496.5;
/// Last Universal JD served (2200-01-01).
const MAX_JD: f64 = 2_524_593.5;

/// Meeus-series ephemeris with a fixed sidereal frame.
///
/// Sidereal longitudes are mean-equinox longitudes less the mean
/// ayanamsha, so nutation cancels out of every panchang angle. Rise and
/// set use apparent (nutated) equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalyticEphemeris {
    system: AyanamshaSystem,
    riseset: RiseSetConfig,
}

impl AnalyticEphemeris {
    pub fn new(system: AyanamshaSystem) -> Self {
        Self {
            system,
            riseset: RiseSetConfig::default(),
        }
    }

    pub fn with_riseset_config(self, riseset: RiseSetConfig) -> Self {
        Self { riseset, ..self }
    }

    pub fn system(&self) -> AyanamshaSystem {
        self.system
    }

    pub fn riseset_config(&self) -> &RiseSetConfig {
        &self.riseset
    }

    fn check_range(at: Instant) -> Result<f64, EphemerisError> {
        let jd = at.jd_ut();
        if !(MIN_JD..=MAX_JD).contains(&jd) {
            return Err(EphemerisError::OutOfRange("analytic series cover 1800-2200"));
        }
        Ok(jd_to_centuries(at.jd_tt()))
    }

    /// Ayanamsha in force at `at`, in degrees.
    pub fn ayanamsha_deg(&self, at: Instant) -> Result<f64, EphemerisError> {
        Ok(ayanamsha_mean_deg(self.system, Self::check_range(at)?))
    }

    /// Longitude from the mean equinox of date, in degrees [0, 360).
    pub fn tropical_longitude(&self, body: Body, at: Instant) -> Result<f64, EphemerisError> {
        let t = Self::check_range(at)?;
        Ok(match body {
            Body::Sun => solar_position(t).aberrated_longitude_deg(),
            Body::Moon => lunar_position(t).longitude_deg,
        })
    }

    fn horizon_state(&self, body: Body, jd_ut: f64, altitude_m: f64) -> HorizonState {
        let t = jd_to_centuries(Instant::from_jd_ut(jd_ut).jd_tt());
        let nut = nutation(t);
        let obliquity = (mean_obliquity_deg(t) + nut.delta_eps_deg).to_radians();

        let (lon_deg, lat_deg, target_altitude_deg) = match body {
            Body::Sun => (
                solar_position(t).aberrated_longitude_deg(),
                0.0,
                self.riseset.solar_target_altitude_deg(altitude_m),
            ),
            Body::Moon => {
                let moon = lunar_position(t);
                (
                    moon.longitude_deg,
                    moon.latitude_deg,
                    self.riseset
                        .lunar_target_altitude_deg(moon.parallax_deg(), altitude_m),
                )
            }
        };

        let (ra_rad, dec_rad) = ecliptic_to_equatorial(
            (lon_deg + nut.delta_psi_deg).to_radians(),
            lat_deg.to_radians(),
            obliquity,
        );
        HorizonState {
            ra_rad,
            dec_rad,
            target_altitude_deg,
        }
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn sidereal_longitude(&self, body: Body, at: Instant) -> Result<f64, EphemerisError> {
        let tropical = self.tropical_longitude(body, at)?;
        Ok(normalize_360(tropical - self.ayanamsha_deg(at)?))
    }

    fn next_rise_set(
        &self,
        body: Body,
        kind: RiseSetKind,
        after: Instant,
        place: &Place,
    ) -> Result<RiseSetResult, EphemerisError> {
        Self::check_range(after)?;
        let place = place.validated()?;
        next_rise_set_after(
            |jd| Ok(self.horizon_state(body, jd, place.altitude_m)),
            &place,
            kind,
            after,
            hour_angle_rate(body),
        )
    }
}
