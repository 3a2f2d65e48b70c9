use crate::error::{Error, Result};
use crate::support::Support;
use crate::FloatScalar;

use super::{Inversion, MonotoneFunction, RootSettings};

/// Brent–Dekker solver for `f(x) = u` on a bracketing interval.
///
/// Keeps three points: `b` the current best estimate, `a` the previous
/// iterate and `c` the bracket end whose residual has the opposite sign of
/// `b`'s. Each step tries secant (`a == c`) or inverse quadratic
/// interpolation, and falls back to bisection whenever the interpolated
/// step would leave the bracket or shrink it more slowly than halving.
///
/// The effective tolerance is `settings.tol + ε(precision) + machine ε`, so
/// an unattainably small `tol` cannot stall the solver. The returned `x` is
/// clamped to `support`.
///
/// # Arguments
///
/// * `f` — nondecreasing function, typically a cdf
/// * `a`, `b` — bracket ends, in either order
/// * `u` — target value
/// * `support` — interval the result is clamped to
/// * `settings` — tolerances and iteration cap
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `f(a) > u` or `f(b) < u` after
/// ordering `a <= b`, or if either end evaluates to NaN.
///
/// Hitting `settings.max_iter` is not an error: the best `b` is returned
/// with `converged == false`.
///
/// # Example
///
/// ```
/// use distinv::inverse::{solve, RootSettings};
/// use distinv::Support;
///
/// let r = solve(&|x: f64| x * x, 0.0, 1.0, 0.25, Support::real_line(), &RootSettings::default())
///     .unwrap();
/// assert!((r.x - 0.5).abs() < 1e-10);
/// ```
pub fn solve<T, F>(
    f: &F,
    a: T,
    b: T,
    u: T,
    support: Support<T>,
    settings: &RootSettings<T>,
) -> Result<Inversion<T>>
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
    Ok(solve_enclosed(f, a, ua, b, ub, u, support, settings, 2))
}

/// General root of `f(x) = 0` with `f(a) <= 0 <= f(b)`.
///
/// Equivalent to [`solve`] with `u = 0` and no support clamping.
///
/// # Example
///
/// ```
/// use distinv::inverse::{brent_dekker, RootSettings};
///
/// // √2 as the root of x² − 2
/// let r = brent_dekker(&|x: f64| x * x - 2.0, 0.0, 2.0, &RootSettings::default()).unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn brent_dekker<T, F>(f: &F, a: T, b: T, settings: &RootSettings<T>) -> Result<Inversion<T>>
where
    T: FloatScalar,
    F: MonotoneFunction<T> + ?Sized,
{
    solve(f, a, b, T::zero(), Support::real_line(), settings)
}

/// Brent–Dekker iteration once `ua = f(a) - u <= 0 <= ub = f(b) - u` is known.
#[allow(clippy::too_many_arguments)]
pub(super) fn solve_enclosed<T, F>(
    f: &F,
    mut a: T,
    mut ua: T,
    mut b: T,
    mut ub: T,
    u: T,
    support: Support<T>,
    settings: &RootSettings<T>,
    mut evals: usize,
) -> Inversion<T>
where
    T: FloatScalar,
    F: MonotoneFunction<T> + ?Sized,
{
    if ua == T::zero() {
        return Inversion::exact(support.clamp(a), evals);
    }
    if ub == T::zero() {
        return Inversion::exact(support.clamp(b), evals);
    }

    let half = T::lit(0.5);
    let two = T::lit(2.0);
    let three = T::lit(3.0);
    let four = T::lit(4.0);
    let tol = settings.tol + settings.precision.epsilon::<T>() + T::epsilon();

    let mut c = a;
    let mut uc = ua;
    // Current step and the one before it.
    let mut len = b - a;
    let mut prev = len;

    for iter in 0..settings.max_iter {
        if uc.abs() < ub.abs() {
            a = b;
            b = c;
            c = a;
            ua = ub;
            ub = uc;
            uc = ua;
        }

        let tol1 = tol + four * T::epsilon() * b.abs();
        let xm = half * (c - b);
        if ub == T::zero() || xm.abs() <= tol1 {
            return Inversion {
                x: support.clamp(b),
                residual: ub,
                iterations: iter,
                evals,
                converged: true,
            };
        }

        if prev.abs() >= tol1 && ua.abs() > ub.abs() {
            let s = ub / ua;
            let (mut p, mut q) = if a == c {
                // secant
                (two * xm * s, T::one() - s)
            } else {
                // inverse quadratic
                let qa = ua / uc;
                let r = ub / uc;
                (
                    s * (two * xm * qa * (qa - r) - (b - a) * (r - T::one())),
                    (qa - T::one()) * (r - T::one()) * (s - T::one()),
                )
            };
            if p > T::zero() {
                q = -q;
            }
            p = p.abs();

            if two * p >= three * xm * q - (q * tol1).abs() || p >= (half * prev * q).abs() {
                len = xm;
                prev = len;
            } else {
                prev = len;
                len = p / q;
            }
        } else {
            len = xm;
            prev = len;
        }

        a = b;
        ua = ub;
        if len.abs() > tol1 {
            b = b + len;
        } else if xm < T::zero() {
            b = b - tol1;
        } else {
            b = b + tol1;
        }
        ub = f.evaluate(b) - u;
        evals += 1;

        if (ub > T::zero()) == (uc > T::zero()) {
            c = a;
            uc = ua;
            len = b - a;
            prev = len;
        }
    }

    tracing::warn!(
        iterations = settings.max_iter,
        x = ?b,
        residual = ?ub,
        "brent-dekker: no convergence"
    );
    Inversion {
        x: support.clamp(b),
        residual: ub,
        iterations: settings.max_iter,
        evals,
        converged: false,
    }
}
