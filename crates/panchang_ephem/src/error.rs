//! Error type for ephemeris and rise/set queries.

/// Errors from an [`EphemerisProvider`](crate::EphemerisProvider).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Observer coordinates or offset outside their valid range.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Query epoch outside the span the provider supports.
    #[error("epoch out of range: {0}")]
    OutOfRange(&'static str),
    /// An iterative solution failed to settle.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// Provider-specific failure.
    #[error("ephemeris backend: {0}")]
    Backend(String),
}
