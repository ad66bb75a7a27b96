//! Time handling for panchang computation.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - [`Instant`] (Universal) and [`LocalInstant`] (Universal + explicit hour
//!   offset), so a time value is never ambiguous about its clock
//! - [`CivilDate`] for the calendar day a panchang is drawn up for
//! - [`UtcTime`] parsing and printing
//! - ΔT (TT − UT) and Greenwich mean sidereal time
//!
//! Ephemeris queries always take Universal instants. Displayed and
//! compared times are Local: `local = universal + offset / 24`.

pub mod civil_date;
pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use civil_date::CivilDate;
pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use instant::{Instant, LocalInstant};
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries};
pub use sidereal::{SIDEREAL_RATE_RAD_PER_DAY, gmst_rad, hour_angle_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
