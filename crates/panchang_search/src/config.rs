//! Configuration for panchang computation.

use panchang_ephem::{AnalyticEphemeris, AyanamshaSystem, RiseSetConfig};
use serde::{Deserialize, Serialize};

use crate::error::PanchangError;

/// Which varjyam table to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarjyamTradition {
    /// One window per nakshatra.
    Standard,
    /// As `Standard`, plus a second Moola window at 22.4 nominal hours.
    #[default]
    DoubleMoola,
}

impl VarjyamTradition {
    pub const fn double_moola(self) -> bool {
        matches!(self, Self::DoubleMoola)
    }
}

/// Settings for [`compute`](crate::compute).
///
/// The ayanamsha and rise/set settings only take effect through
/// [`PanchangConfig::analytic_provider`]; a caller-supplied provider keeps
/// its own frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanchangConfig {
    /// Sidereal frame. Default: Lahiri.
    pub ayanamsha: AyanamshaSystem,
    /// Sunrise/sunset convention. Default: upper limb, 34′ refraction.
    pub riseset: RiseSetConfig,
    /// Shortest varjyam or amrit kalam window reported, in minutes. Default: 5.
    pub min_window_minutes: f64,
    /// A moonrise this close to sunrise is dropped, in minutes. Default: 2.
    pub moonrise_sunrise_gap_minutes: f64,
    pub varjyam_tradition: VarjyamTradition,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default(),
            riseset: RiseSetConfig::default(),
            min_window_minutes: 5.0,
            moonrise_sunrise_gap_minutes: 2.0,
            varjyam_tradition: VarjyamTradition::default(),
        }
    }
}

impl PanchangConfig {
    /// Reject thresholds that are negative, zero or non-finite.
    pub fn validate(&self) -> Result<(), PanchangError> {
        if !(self.min_window_minutes.is_finite() && self.min_window_minutes > 0.0) {
            return Err(PanchangError::InvalidConfig(
                "min_window_minutes must be positive",
            ));
        }
        if !(self.moonrise_sunrise_gap_minutes.is_finite()
            && self.moonrise_sunrise_gap_minutes > 0.0)
        {
            return Err(PanchangError::InvalidConfig(
                "moonrise_sunrise_gap_minutes must be positive",
            ));
        }
        if !(self.riseset.refraction_arcmin.is_finite()
            && self.riseset.semidiameter_arcmin.is_finite())
        {
            return Err(PanchangError::InvalidConfig(
                "rise/set corrections must be finite",
            ));
        }
        Ok(())
    }

    /// Built-in provider in this configuration's frame and rise/set convention.
    pub fn analytic_provider(&self) -> AnalyticEphemeris {
        AnalyticEphemeris::new(self.ayanamsha).with_riseset_config(self.riseset)
    }

    pub(crate) fn min_window_days(&self) -> f64 {
        self.min_window_minutes / (24.0 * 60.0)
    }

    pub(crate) fn moonrise_gap_days(&self) -> f64 {
        self.moonrise_sunrise_gap_minutes / (24.0 * 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PanchangConfig::default();
        assert_eq!(c.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(c.varjyam_tradition, VarjyamTradition::DoubleMoola);
        assert!((c.min_window_minutes - 5.0).abs() < 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_thresholds() {
        let c = PanchangConfig {
            min_window_minutes: 0.0,
            ..PanchangConfig::default()
        };
        assert!(matches!(c.validate(), Err(PanchangError::InvalidConfig(_))));
        let c = PanchangConfig {
            moonrise_sunrise_gap_minutes: f64::NAN,
            ..PanchangConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: PanchangConfig =
            serde_json::from_str(r#"{"min_window_minutes": 10.0, "varjyam_tradition": "standard"}"#)
                .unwrap();
        assert!((c.min_window_minutes - 10.0).abs() < 1e-12);
        assert_eq!(c.varjyam_tradition, VarjyamTradition::Standard);
        assert!((c.moonrise_sunrise_gap_minutes - 2.0).abs() < 1e-12);
    }

    #[test]
    fn provider_carries_frame() {
        let c = PanchangConfig::default();
        assert_eq!(c.analytic_provider().system(), AyanamshaSystem::Lahiri);
    }
}
