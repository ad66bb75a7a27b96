//! Pure numeric building blocks for panchang computation.
//!
//! This crate provides:
//! - Angle normalization, degree ↔ (unit, minute, second) conversion and
//!   angle unwrapping
//! - A bracketed bisection root finder
//! - Inverse Lagrange interpolation over a handful of samples
//!
//! Everything here is stateless and total over finite inputs; the only
//! failure modes are the malformed-input cases reported by [`RootError`].

pub mod angle;
pub mod error;
pub mod root;

pub use angle::{Dms, normalize_180, normalize_360, to_dms, unwrap_ascending, unwrapped};
pub use error::RootError;
pub use root::{
    BISECTION_EPSILON_DAYS, MAX_BISECTION_STEPS, bisection_search, inverse_lagrange,
    try_bisection_search,
};
