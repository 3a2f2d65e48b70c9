use crate::error::Result;
use crate::precision::BRACKET_HALF_WIDTH;
use crate::support::Support;
use crate::FloatScalar;

use super::{check_probability, MonotoneFunction};

/// Interval `[a, b]` with `F(a) <= u <= F(b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    /// Lower end.
    pub a: T,
    /// Upper end.
    pub b: T,
}

impl<T: FloatScalar> Bracket<T> {
    /// `b - a`.
    pub fn width(&self) -> T {
        self.b - self.a
    }
}

/// Find an interval containing the solution of `f(x) = u`.
///
/// Starts from `[-8, 8]`. If `f(8) < u` the upper end doubles until
/// `f(b) >= u` and `[b/2, b]` is returned; otherwise if `f(-8) > u` the
/// lower end doubles until `f(a) <= u` and `[a, a/2]` is returned. Doubling
/// also stops at the support edge and at `T::max_value() / 2`. Both ends are
/// clipped to `support`.
///
/// When the ceiling is reached without bracketing `u` (extremely heavy
/// tails), the widest interval reached is returned and a warning is logged;
/// such a bracket does not enclose `u`.
///
/// # Errors
///
/// Returns [`Error::ProbabilityOutOfRange`](crate::Error::ProbabilityOutOfRange)
/// if `u ∉ [0, 1]`.
///
/// # Example
///
/// ```
/// use distinv::inverse::find_bracket;
/// use distinv::Support;
///
/// let cdf = |x: f64| if x <= 0.0 { 0.0 } else { 1.0 - (-x / 100.0).exp() };
/// let br = find_bracket(&cdf, 0.99, Support::positive()).unwrap();
/// assert!(cdf(br.a) <= 0.99 && 0.99 <= cdf(br.b));
/// ```
pub fn find_bracket<T, F>(f: &F, u: T, support: Support<T>) -> Result<Bracket<T>>
where
    T: FloatScalar,
    F: MonotoneFunction<T> + ?Sized,
{
    check_probability(u)?;
    let two = T::lit(2.0);
    let b0 = T::lit(BRACKET_HALF_WIDTH);
    let ceiling = T::max_value() / two;

    let mut b = b0;
    while b < ceiling && b < support.upper && f.evaluate(b) < u {
        b = b * two;
    }
    if b > b0 {
        if b >= ceiling && f.evaluate(support.clamp(b)) < u {
            tracing::warn!(b = ?b, "bracket search reached the numeric ceiling");
        }
        return Ok(clip(b / two, b, support));
    }

    let mut a = -b0;
    while a > -ceiling && a > support.lower && f.evaluate(a) > u {
        a = a * two;
    }
    if a < -b0 {
        if a <= -ceiling && f.evaluate(support.clamp(a)) > u {
            tracing::warn!(a = ?a, "bracket search reached the numeric ceiling");
        }
        return Ok(clip(a, a / two, support));
    }

    Ok(clip(a, b, support))
}

fn clip<T: FloatScalar>(a: T, b: T, support: Support<T>) -> Bracket<T> {
    let a = support.clamp(a);
    let b = support.clamp(b);
    if a <= b {
        Bracket { a, b }
    } else {
        Bracket { a: b, b: a }
    }
}
