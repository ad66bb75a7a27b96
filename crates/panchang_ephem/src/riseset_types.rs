//! Types for rise/set calculations.
//!
//! Provides the observer's place, event kinds, configuration, and result
//! types used by the rise/set solver and the provider trait.

use std::f64::consts::PI;

use panchang_time::Instant;
use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// An observer on Earth's surface together with their civil clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
    /// Civil clock offset from Universal time, in hours (IST = 5.5).
    pub utc_offset_hours: f64,
}

impl Place {
    /// Create a validated place at sea level.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, EphemerisError> {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m: 0.0,
            utc_offset_hours,
        }
        .validated()
    }

    /// Same place at a different altitude.
    pub fn with_altitude(self, altitude_m: f64) -> Result<Self, EphemerisError> {
        Self { altitude_m, ..self }.validated()
    }

    /// Check every field against its range.
    pub fn validated(self) -> Result<Self, EphemerisError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemerisError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemerisError::InvalidLocation("longitude outside [-180, 180]"));
        }
        if !(-14.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(EphemerisError::InvalidLocation("UTC offset outside [-14, 14] hours"));
        }
        if !self.altitude_m.is_finite() || self.altitude_m < -500.0 {
            return Err(EphemerisError::InvalidLocation("altitude below -500 m"));
        }
        Ok(self)
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Which horizon crossing to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiseSetKind {
    Rise,
    Set,
}

impl RiseSetKind {
    pub fn is_rising(self) -> bool {
        self == Self::Rise
    }
}

/// Configurable parameters for rise/set computation.
///
/// The defaults give the almanac convention: the upper limb touching the
/// horizon with standard refraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Geometric dip of the horizon for an elevated observer, in degrees.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        }
    }

    /// Altitude of the Sun's centre at sunrise/sunset, in degrees (negative).
    ///
    /// `h0 = −(refraction + semidiameter) / 60 − dip`
    pub fn solar_target_altitude_deg(&self, altitude_m: f64) -> f64 {
        -(self.refraction_arcmin + self.semidiameter_arcmin) / 60.0 - self.dip_deg(altitude_m)
    }

    /// Altitude of the Moon's centre at moonrise/moonset, in degrees.
    ///
    /// `h0 = 0.7275·π − refraction / 60 − dip`, with π the horizontal
    /// parallax (Meeus eq. 15.1); the factor folds in the lunar semidiameter.
    pub fn lunar_target_altitude_deg(&self, parallax_deg: f64, altitude_m: f64) -> f64 {
        0.7275 * parallax_deg - self.refraction_arcmin / 60.0 - self.dip_deg(altitude_m)
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RiseSetResult {
    /// The event occurs at this Universal instant.
    Event(Instant),
    /// Body stays below the horizon for the whole day (polar night).
    NeverRises,
    /// Body stays above the horizon for the whole day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    pub fn event(self) -> Option<Instant> {
        match self {
            Self::Event(t) => Some(t),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}
