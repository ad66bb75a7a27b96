//! Sun and Moon positions for panchang computation.
//!
//! The calendar engine only ever talks to an [`EphemerisProvider`]: sidereal
//! longitudes and rise/set instants, under a sidereal frame fixed when the
//! provider is built. [`AnalyticEphemeris`] is the built-in provider, using
//! truncated Meeus series for the Sun and Moon; it needs no data files.

pub mod analytic;
pub mod ayanamsha;
pub mod error;
pub mod lunar;
pub mod nutation;
pub mod provider;
pub mod riseset;
pub mod riseset_types;
pub mod solar;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{AyanamshaSystem, ayanamsha_mean_deg, general_precession_longitude_deg};
pub use error::EphemerisError;
pub use provider::{Body, EphemerisProvider};
pub use riseset_types::{Place, RiseSetConfig, RiseSetKind, RiseSetResult};
