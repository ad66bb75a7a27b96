//! Bracketed bisection and inverse Lagrange interpolation.
//!
//! These two routines are the whole numeric kernel behind every boundary
//! instant in a panchang: interpolation for the fast sunrise-anchored
//! estimates, bisection where a bracket around a crossing is known.
//!
//! The bisection keeps the classic narrowing rule (`f(mid)·f(hi) >= 0`
//! moves `hi`) but checks its precondition and caps its step count, so a
//! malformed bracket fails loudly instead of converging somewhere wrong.

use tracing::trace;

use crate::error::RootError;

/// Bracket width at which bisection stops, in days (~43 µs).
pub const BISECTION_EPSILON_DAYS: f64 = 5e-10;

/// Upper bound on bisection halvings. A 4-day bracket needs ~33.
pub const MAX_BISECTION_STEPS: usize = 200;

/// Find the zero of `f` inside `[lo, hi]` by bisection.
///
/// The function must change sign exactly once in the bracket. Returns the
/// midpoint of the final bracket once its width is at most
/// [`BISECTION_EPSILON_DAYS`].
pub fn bisection_search<F>(mut f: F, lo: f64, hi: f64) -> Result<f64, RootError>
where
    F: FnMut(f64) -> f64,
{
    try_bisection_search(|t| Ok::<f64, RootError>(f(t)), lo, hi)
}

/// Fallible variant of [`bisection_search`].
///
/// `f` may itself fail (e.g. an ephemeris query); its error is propagated
/// unchanged. Kernel failures are converted through `From<RootError>`.
pub fn try_bisection_search<F, E>(mut f: F, lo: f64, hi: f64) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<RootError>,
{
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(RootError::InvalidBracket { lo, hi }.into());
    }

    let mut left = lo;
    let mut right = hi;
    let f_lo = f(left)?;
    let mut f_right = f(right)?;
    if !f_lo.is_finite() || !f_right.is_finite() {
        return Err(RootError::NonFinite("bisection bracket").into());
    }
    if f_lo * f_right > 0.0 {
        return Err(RootError::NoSignChange { lo, hi }.into());
    }

    for step in 0..MAX_BISECTION_STEPS {
        let middle = 0.5 * (left + right);
        let f_mid = f(middle)?;
        if !f_mid.is_finite() {
            return Err(RootError::NonFinite("bisection midpoint").into());
        }
        if f_mid * f_right >= 0.0 {
            right = middle;
            f_right = f_mid;
        } else {
            left = middle;
        }

        if right - left <= BISECTION_EPSILON_DAYS {
            trace!(step, root = 0.5 * (left + right), "bisection converged");
            return Ok(0.5 * (left + right));
        }
    }

    Err(RootError::IterationLimit(MAX_BISECTION_STEPS).into())
}

/// Solve for the abscissa at which the sampled function reaches `target`.
///
/// Evaluates the Lagrange basis with the roles of x and y swapped:
///
/// `x(target) = Σ_i x_i · Π_{j≠i} (target − y_j) / (y_i − y_j)`
///
/// The samples must be strictly monotone in `ys` (no two equal ordinates).
/// Every panchang caller passes 4 or 5 equally spaced day offsets, or 17
/// quarter-day offsets for syzygy searches.
pub fn inverse_lagrange(xs: &[f64], ys: &[f64], target: f64) -> Result<f64, RootError> {
    if xs.len() != ys.len() {
        return Err(RootError::DegenerateSamples("length mismatch"));
    }
    if xs.len() < 2 {
        return Err(RootError::DegenerateSamples("need at least two samples"));
    }

    let mut total = 0.0;
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut numer = 1.0;
        let mut denom = 1.0;
        for (j, &yj) in ys.iter().enumerate() {
            if j != i {
                numer *= target - yj;
                denom *= yi - yj;
            }
        }
        if denom == 0.0 {
            return Err(RootError::DegenerateSamples("repeated ordinate"));
        }
        total += numer * xi / denom;
    }

    if !total.is_finite() {
        return Err(RootError::NonFinite("inverse lagrange"));
    }
    Ok(total)
}
