//! Continuous engine: derivative-free inversion of monotone functions.
//!
//! Given only a nondecreasing `F` (typically a distribution's cdf) and a
//! target `u ∈ [0, 1]`, the engine finds `x` with `F(x) ≈ u`:
//!
//! - [`find_bracket`] — exponential doubling from `[-8, 8]`, clipped to the support
//! - [`solve`] — Brent–Dekker (bisection + secant + inverse quadratic interpolation)
//! - [`bisect`] — plain bisection, linear but unconditionally safe
//! - [`inverse_brent`] / [`inverse_bisection`] — bracket + solver, with
//!   `u = 0` and `u = 1` mapped straight to the support edges
//!
//! Solvers never fail on non-convergence. They return their best estimate
//! with [`Inversion::converged`] set to `false` and log a warning; use
//! [`Inversion::converged_or_err`] to turn that into an error.
//!
//! # Example
//!
//! ```
//! use distinv::inverse::{inverse_brent, RootSettings};
//! use distinv::Support;
//!
//! // Logistic cdf, inverse is ln(u / (1 - u)).
//! let cdf = |x: f64| 1.0 / (1.0 + (-x).exp());
//! let r = inverse_brent(&cdf, 0.9, Support::real_line(), &RootSettings::default()).unwrap();
//! assert!(r.converged);
//! assert!((r.x - 9.0_f64.ln()).abs() < 1e-12);
//! ```

mod bisection;
mod bracket;
mod brent;


pub use bisection::bisect;
pub use bracket::{find_bracket, Bracket};
pub use brent::{brent_dekker, solve};

use crate::error::{Error, Result};
use crate::precision::PrecisionBudget;
use crate::support::Support;
use crate::FloatScalar;

/// A real function of one real variable, nondecreasing where the engine uses it.
///
/// Blanket-implemented for every `Fn(T) -> T`, so closures such as
/// `|x| dist.cdf(x)` can be passed directly.
pub trait MonotoneFunction<T> {
    /// Value of the function at `x`.
    fn evaluate(&self, x: T) -> T;
}

impl<T, F: Fn(T) -> T> MonotoneFunction<T> for F {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        self(x)
    }
}

/// Settings for the inversion solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootSettings<T> {
    /// Caller's absolute tolerance on `x`.
    pub tol: T,
    /// Decimal precision budget; its epsilon is added to `tol` by Brent–Dekker
    /// and bounds the relative step of bisection.
    pub precision: PrecisionBudget,
    /// Maximum number of iterations before giving up.
    pub max_iter: usize,
}

impl<T: FloatScalar> RootSettings<T> {
    /// Iteration cap of the Brent–Dekker solver.
    pub const BRENT_MAX_ITER: usize = 50;
    /// Iteration cap of the bisection solver.
    pub const BISECTION_MAX_ITER: usize = 100;

    /// Brent–Dekker configuration: default precision, 50 iterations.
    pub fn brent() -> Self {
        let precision = PrecisionBudget::default();
        Self {
            tol: precision.epsilon(),
            precision,
            max_iter: Self::BRENT_MAX_ITER,
        }
    }

    /// Bisection configuration: default precision capped at `T::DIGITS`,
    /// 100 iterations.
    pub fn bisection() -> Self {
        let precision = PrecisionBudget::saturating(crate::precision::DEFAULT_DIGITS.min(T::DIGITS));
        Self {
            tol: precision.epsilon(),
            precision,
            max_iter: Self::BISECTION_MAX_ITER,
        }
    }

    /// Replace the precision budget, resetting `tol` to its epsilon.
    pub fn with_precision(mut self, precision: PrecisionBudget) -> Self {
        self.precision = precision;
        self.tol = precision.epsilon();
        self
    }

    /// Replace the caller tolerance.
    pub fn with_tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }

    /// Replace the iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

impl<T: FloatScalar> Default for RootSettings<T> {
    fn default() -> Self {
        Self::brent()
    }
}

/// Result of one inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion<T> {
    /// Approximate solution of `F(x) = u`.
    pub x: T,
    /// `F(x) - u` at the returned point.
    pub residual: T,
    /// Number of solver iterations performed.
    pub iterations: usize,
    /// Number of evaluations of `F`.
    pub evals: usize,
    /// False if the iteration cap was hit, or the bracket search could not
    /// enclose `u`; `x` is then a best-effort estimate.
    pub converged: bool,
}

impl<T: FloatScalar> Inversion<T> {
    /// A result known without evaluating `F` (support edges, exact hits).
    pub(crate) fn exact(x: T, evals: usize) -> Self {
        Self {
            x,
            residual: T::zero(),
            iterations: 0,
            evals,
            converged: true,
        }
    }

    /// `x` if the solver converged, [`Error::NoConvergence`] otherwise.
    pub fn converged_or_err(self) -> Result<T> {
        if self.converged {
            Ok(self.x)
        } else {
            Err(Error::NoConvergence {
                iterations: self.iterations,
            })
        }
    }
}

pub(crate) fn check_probability<T: FloatScalar>(u: T) -> Result<()> {
    if u >= T::zero() && u <= T::one() {
        Ok(())
    } else {
        Err(Error::ProbabilityOutOfRange)
    }
}

/// Outcome of bracketing a target before handing it to a solver.
enum Enclosure<T> {
    /// `F(a) - u <= 0 <= F(b) - u`, with both residuals already evaluated.
    Bracketed { a: T, ua: T, b: T, ub: T },
    /// The bracket search hit the numeric ceiling without enclosing `u`.
    Edge(Inversion<T>),
}

fn enclose<T, F>(cdf: &F, u: T, support: Support<T>) -> Result<Enclosure<T>>
where
    T: FloatScalar,
    F: MonotoneFunction<T> + ?Sized,
{
    let br = find_bracket(cdf, u, support)?;
    let ua = cdf.evaluate(br.a) - u;
    let ub = cdf.evaluate(br.b) - u;
    if ua.is_nan() || ub.is_nan() {
        return Err(Error::InvalidBracket);
    }
    let (x, residual) = if ua > T::zero() {
        (br.a, ua)
    } else if ub < T::zero() {
        (br.b, ub)
    } else {
        return Ok(Enclosure::Bracketed {
            a: br.a,
            ua,
            b: br.b,
            ub,
        });
    };
    tracing::warn!(x = ?x, residual = ?residual, "bracket search could not enclose target");
    Ok(Enclosure::Edge(Inversion {
        x,
        residual,
        iterations: 0,
        evals: 2,
        converged: false,
    }))
}

/// Compute `x` with `cdf(x) = u` by bracketing and Brent–Dekker.
///
/// `u = 0` returns `support.lower` and `u = 1` returns `support.upper`
/// without evaluating `cdf`. The result is clamped to the support.
///
/// # Errors
///
/// Returns [`Error::ProbabilityOutOfRange`] if `u ∉ [0, 1]`, and
/// [`Error::InvalidBracket`] if `cdf` returns NaN at the bracket ends.
pub fn inverse_brent<T, F>(
    cdf: &F,
    u: T,
    support: Support<T>,
    settings: &RootSettings<T>,
) -> Result<Inversion<T>>
where
    T: FloatScalar,
    F: MonotoneFunction<T> + ?Sized,
{
    check_probability(u)?;
    if u <= T::zero() {
        return Ok(Inversion::exact(support.lower, 0));
    }
    if u >= T::one() {
        return Ok(Inversion::exact(support.upper, 0));
    }
    match enclose(cdf, u, support)? {
        Enclosure::Bracketed { a, ua, b, ub } => {
            Ok(brent::solve_enclosed(cdf, a, ua, b, ub, u, support, settings, 2))
        }
        Enclosure::Edge(partial) => Ok(partial),
    }
}

/// Compute `x` with `cdf(x) = u` by bracketing and bisection.
///
/// Same edge behaviour as [`inverse_brent`]. The precision budget must
/// request between 1 and `T::DIGITS` decimals, since bisection stops on a
/// relative step size.
///
/// # Errors
///
/// Returns [`Error::ProbabilityOutOfRange`] if `u ∉ [0, 1]`, and
/// [`Error::PrecisionOutOfRange`] if the budget is 0 or exceeds `T::DIGITS`.
pub fn inverse_bisection<T, F>(
    cdf: &F,
    u: T,
    support: Support<T>,
    settings: &RootSettings<T>,
) -> Result<Inversion<T>>
where
    T: FloatScalar,
    F: MonotoneFunction<T> + ?Sized,
{
    check_probability(u)?;
    let digits = settings.precision.digits();
    if digits == 0 || digits > T::DIGITS {
        return Err(Error::PrecisionOutOfRange);
    }
    if u <= T::zero() {
        return Ok(Inversion::exact(support.lower, 0));
    }
    if u >= T::one() {
        return Ok(Inversion::exact(support.upper, 0));
    }
    match enclose(cdf, u, support)? {
        Enclosure::Bracketed { a, ua, b, ub } => {
            Ok(bisection::bisect_enclosed(cdf, a, ua, b, ub, u, settings, 2))
        }
        Enclosure::Edge(partial) => Ok(partial),
    }
}
