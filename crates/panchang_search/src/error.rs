//! Error type for panchang computation.

use panchang_ephem::EphemerisError;
use panchang_math::RootError;
use panchang_time::{CivilDate, TimeError};

/// Errors from computing a panchang.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// The ephemeris provider failed or rejected the query.
    #[error("ephemeris provider: {0}")]
    Provider(#[from] EphemerisError),
    /// A boundary search failed to converge.
    #[error("numeric non-convergence: {0}")]
    NumericNonconvergence(#[from] RootError),
    /// Bad date or time input.
    #[error("time: {0}")]
    Time(#[from] TimeError),
    /// The Sun does not rise on this date at this place.
    #[error("no sunrise on {0}")]
    NoSunrise(CivilDate),
    /// The Sun does not set on this date at this place.
    #[error("no sunset on {0}")]
    NoSunset(CivilDate),
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
