//! Error types for the root-finding kernel.

/// Malformed input to bisection or inverse interpolation.
///
/// Callers surface any of these as a numeric non-convergence: an
/// unconverged guess would silently corrupt everything derived from it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RootError {
    /// Bracket bounds are non-finite or not ordered `lo < hi`.
    #[error("invalid bracket [{lo}, {hi}]")]
    InvalidBracket { lo: f64, hi: f64 },
    /// The target function has the same sign at both bracket ends.
    #[error("no sign change in [{lo}, {hi}]")]
    NoSignChange { lo: f64, hi: f64 },
    /// The bracket did not shrink below tolerance within the step budget.
    #[error("bisection did not converge in {0} steps")]
    IterationLimit(usize),
    /// Interpolation samples are unusable (length mismatch, too few, or
    /// two samples share the same ordinate).
    #[error("degenerate interpolation samples: {0}")]
    DegenerateSamples(&'static str),
    /// The target function or interpolation produced NaN or infinity.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}
