use crate::error::{Error, Result};
use crate::FloatScalar;

use super::{Inversion, MonotoneFunction, RootSettings};

/// Bisection solver for `f(x) = u` on a bracketing interval.
///
/// Halves `[a, b]`, keeping the half whose residuals change sign, until
/// `f(x) = u` exactly or the relative width `|b - a| / (|x| + ε)` drops
/// below `max(settings.tol, machine ε)`. Only linear convergence, but no
/// assumption on `f` beyond monotonicity.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `f(a) > u` or `f(b) < u` after
/// ordering `a <= b`, or if either end evaluates to NaN.
///
/// Hitting `settings.max_iter` returns the last midpoint with
/// `converged == false`.
///
/// # Example
///
/// ```
/// use distinv::inverse::{bisect, RootSettings};
///
/// let r = bisect(&|x: f64| x * x * x, 0.0, 2.0, 0.125, &RootSettings::bisection()).unwrap();
/// assert!(r.converged);
/// assert!((r.x - 0.5).abs() < 1e-12);
/// ```
pub fn bisect<T, F>(f: &F, a: T, b: T, u: T, settings: &RootSettings<T>) -> Result<Inversion<T>>
where
    T: FloatScalar,
    F: MonotoneFunction<T> + ?Sized,
{
    let (a, b) = if b < a { (b, a) } else { (a, b) };
    let ua = f.evaluate(a) - u;
    let ub = f.evaluate(b) - u;
    if ua.is_nan() || ub.is_nan() || ua > T::zero() || ub < T::zero() {
        return Err(Error::InvalidBracket);
    }
    Ok(bisect_enclosed(f, a, ua, b, ub, u, settings, 2))
}

#[allow(clippy::too_many_arguments)]
pub(super) fn bisect_enclosed<T, F>(
    f: &F,
    mut a: T,
    ua: T,
    mut b: T,
    ub: T,
    u: T,
    settings: &RootSettings<T>,
    mut evals: usize,
) -> Inversion<T>
where
    T: FloatScalar,
    F: MonotoneFunction<T> + ?Sized,
{
    if ua == T::zero() {
        return Inversion::exact(a, evals);
    }
    if ub == T::zero() {
        return Inversion::exact(b, evals);
    }

    let half = T::lit(0.5);
    let eps = settings.tol.max(T::epsilon());
    let mut x = a;
    let mut y = ua;

    for iter in 0..settings.max_iter {
        x = half * (a + b);
        y = f.evaluate(x) - u;
        evals += 1;
        if y == T::zero() || ((b - a) / (x.abs() + T::epsilon())).abs() <= eps {
            return Inversion {
                x,
                residual: y,
                iterations: iter + 1,
                evals,
                converged: true,
            };
        }
        if y < T::zero() {
            a = x;
        } else {
            b = x;
        }
    }

    tracing::warn!(
        iterations = settings.max_iter,
        x = ?x,
        residual = ?y,
        "bisection: no convergence"
    );
    Inversion {
        x,
        residual: y,
        iterations: settings.max_iter,
        evals,
        converged: false,
    }
}
