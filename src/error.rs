//! Crate-wide error type.

use thiserror::Error;

/// Errors from distribution construction and numerical inversion.
///
/// Every variant except [`Error::NoConvergence`] is an invalid-argument
/// condition, raised immediately and never retried. Solvers that exhaust
/// their iteration cap do not fail; they report `converged = false` on the
/// returned [`Inversion`](crate::inverse::Inversion), which the caller may
/// escalate into [`Error::NoConvergence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A probability argument lies outside `[0, 1]`.
    #[error("probability not in [0, 1]")]
    ProbabilityOutOfRange,
    /// A distribution or support parameter is out of its valid range.
    #[error("distribution parameter out of valid range")]
    InvalidParameter,
    /// Bracket endpoints do not enclose the target: `F(a) > u` or `F(b) < u`.
    #[error("bracket does not enclose the target value")]
    InvalidBracket,
    /// Requested decimal precision is outside the supported range.
    #[error("requested precision outside supported range")]
    PrecisionOutOfRange,
    /// Solver stopped at its iteration cap without meeting the tolerance.
    #[error("no convergence after {iterations} iterations")]
    NoConvergence {
        /// Iterations performed before giving up.
        iterations: usize,
    },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
