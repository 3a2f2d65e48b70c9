//! Distribution families built on the two inversion engines.
//!
//! Each family is an immutable value: parameters are validated and any
//! table is built once in the constructor, and reconfiguring means
//! constructing a new value. Families implement [`ContinuousDistribution`]
//! or [`DiscreteDistribution`], whose default methods route `inverse_f`
//! through [`inverse`](crate::inverse) and the table lookups through
//! [`discrete`](crate::discrete).
//!
//! # Continuous distributions
//!
//! | Distribution | Parameters | Support | `inverse_f` |
//! |---|---|---|---|
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) | Brent–Dekker |
//! | [`Exponential`] | rate λ | [0, ∞) | closed form |
//! | [`FoldedNormal`] | location μ ≥ 0, scale σ | [0, ∞) | Brent–Dekker |
//! | [`InverseGaussian`] | mean μ, shape λ | [0, ∞) | Brent–Dekker |
//! | [`Gamma`] | shape α, rate λ | [0, ∞) | Brent–Dekker |
//!
//! # Discrete distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Binomial`] | trials n, probability p | {0, …, n} |
//! | [`NegativeBinomial`] | size γ, probability p | {0, 1, 2, …} |
//! | [`Poisson`] | rate λ | {0, 1, 2, …} |
//!
//! Discrete families need the `alloc` feature.
//!
//! # Example
//!
//! ```
//! use distinv::stats::{ContinuousDistribution, Gamma};
//!
//! let g = Gamma::new(2.5_f64, 1.0).unwrap();
//! let x = g.inverse_f(0.3).unwrap();
//! assert!((g.cdf(x) - 0.3).abs() < 1e-12);
//! ```

mod exponential;
mod folded_normal;
mod gamma_dist;
mod inverse_gaussian;
mod normal;

#[cfg(feature = "alloc")]
mod binomial;
#[cfg(feature = "alloc")]
mod negative_binomial;
#[cfg(feature = "alloc")]
mod poisson;

#[cfg(test)]
mod tests;

pub use exponential::Exponential;
pub use folded_normal::FoldedNormal;
pub use gamma_dist::Gamma;
pub use inverse_gaussian::InverseGaussian;
pub use normal::Normal;

#[cfg(feature = "alloc")]
pub use binomial::Binomial;
#[cfg(feature = "alloc")]
pub use negative_binomial::NegativeBinomial;
#[cfg(feature = "alloc")]
pub use poisson::Poisson;

#[cfg(feature = "alloc")]
use crate::discrete::{invert, lower_tail_sum, upper_tail_sum, DiscreteTable, MassFunction};
use crate::error::Result;
use crate::inverse::{inverse_bisection, inverse_brent, RootSettings};
#[cfg(feature = "alloc")]
use crate::precision::TAIL_TERMS;
use crate::support::Support;
use crate::FloatScalar;

/// Capability interface of a continuous distribution.
///
/// Only `density`, `cdf`, `support` and the moments are required.
/// `inverse_f` defaults to bracketing plus Brent–Dekker on `cdf`; families
/// with a closed-form inverse override it.
pub trait ContinuousDistribution<T: FloatScalar> {
    /// Probability density at `x`; zero outside the support.
    fn density(&self, x: T) -> T;

    /// `P[X <= x]`.
    fn cdf(&self, x: T) -> T;

    /// `P[X > x]`. Override when `1 - cdf` loses the upper tail.
    fn bar_f(&self, x: T) -> T {
        T::one() - self.cdf(x)
    }

    /// Interval outside which the density is zero.
    fn support(&self) -> Support<T>;

    /// Solver settings used by the default inversions.
    fn settings(&self) -> RootSettings<T> {
        RootSettings::default()
    }

    /// `x` with `cdf(x) = u`.
    ///
    /// `u = 0` and `u = 1` give the support edges. A solver that stops at
    /// its iteration cap still yields its best estimate; the warning is
    /// logged by the engine.
    ///
    /// # Errors
    ///
    /// [`Error::ProbabilityOutOfRange`](crate::Error::ProbabilityOutOfRange)
    /// if `u ∉ [0, 1]`.
    fn inverse_f(&self, u: T) -> Result<T> {
        let r = inverse_brent(&|x: T| self.cdf(x), u, self.support(), &self.settings())?;
        Ok(r.x)
    }

    /// `inverse_f` through the bisection solver, at the digit budget of
    /// [`settings`](Self::settings) capped to what `T` can represent.
    fn inverse_f_bisection(&self, u: T) -> Result<T> {
        let digits = self.settings().precision.digits().min(T::DIGITS);
        let settings = RootSettings::bisection()
            .with_precision(crate::precision::PrecisionBudget::saturating(digits));
        let r = inverse_bisection(&|x: T| self.cdf(x), u, self.support(), &settings)?;
        Ok(r.x)
    }

    /// `E[X]`.
    fn mean(&self) -> T;

    /// `Var(X)`.
    fn variance(&self) -> T;

    /// `√Var(X)`.
    fn std_dev(&self) -> T {
        self.variance().sqrt()
    }
}

/// Capability interface of an integer-valued distribution.
pub trait DiscreteDistribution<T: FloatScalar> {
    /// `P[X = x]`.
    fn prob(&self, x: i64) -> T;

    /// `P[X <= x]`.
    fn cdf(&self, x: i64) -> T;

    /// `P[X >= x]`.
    fn bar_f(&self, x: i64) -> T {
        T::one() - self.cdf(x - 1)
    }

    /// Smallest `x` with `cdf(x) >= u`.
    ///
    /// # Errors
    ///
    /// [`Error::ProbabilityOutOfRange`](crate::Error::ProbabilityOutOfRange)
    /// if `u ∉ [0, 1]`.
    fn inverse_f_int(&self, u: T) -> Result<i64>;

    /// Integer support.
    fn support(&self) -> Support<i64>;

    /// `E[X]`.
    fn mean(&self) -> T;

    /// `Var(X)`.
    fn variance(&self) -> T;

    /// `√Var(X)`.
    fn std_dev(&self) -> T {
        self.variance().sqrt()
    }
}

/// Value of an incomplete gamma evaluation, or NaN with a warning when it
/// failed.
pub(crate) fn incomplete_or_nan<T: FloatScalar>(r: Result<T>) -> T {
    r.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "incomplete gamma evaluation failed");
        T::nan()
    })
}

/// Standard normal `Φ(z)`, through `erfc` on both sides of zero.
pub(crate) fn std_normal_cdf<T: FloatScalar>(z: T) -> T {
    T::lit(0.5) * (-z * T::lit(core::f64::consts::FRAC_1_SQRT_2)).erfc()
}

/// Standard normal density.
pub(crate) fn std_normal_density<T: FloatScalar>(z: T) -> T {
    // 1/√(2π)
    T::lit(0.398_942_280_401_432_7) * (T::lit(-0.5) * z * z).exp()
}

/// Smallest `x` in `support` with `cdf(x) >= u`, by doubling steps out of
/// `guess` and then integer bisection.
///
/// `cdf` must be nondecreasing; `u` is assumed inside `(0, 1)`.
#[cfg(feature = "alloc")]
pub(crate) fn search_int<T, F>(cdf: F, u: T, support: Support<i64>, guess: i64, step: i64) -> i64
where
    T: FloatScalar,
    F: Fn(i64) -> T,
{
    let mut step = step.max(1);
    let mut hi = support.clamp(guess);
    let mut lo;
    if cdf(hi) >= u {
        loop {
            if hi == support.lower {
                return hi;
            }
            let cand = hi.saturating_sub(step).max(support.lower);
            if cdf(cand) < u {
                lo = cand;
                break;
            }
            hi = cand;
            step = step.saturating_mul(2);
        }
    } else {
        loop {
            if hi == support.upper {
                return hi;
            }
            let cand = hi.saturating_add(step).min(support.upper);
            if cdf(cand) >= u {
                lo = hi;
                hi = cand;
                break;
            }
            hi = cand;
            step = step.saturating_mul(2);
        }
    }

    // cdf(lo) < u <= cdf(hi)
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if cdf(mid) >= u {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi
}

/// `P[X = x]` from the table, or from the mass function outside it.
#[cfg(feature = "alloc")]
pub(crate) fn table_prob<T, M>(mass: &M, table: &DiscreteTable<T>, x: i64) -> T
where
    T: FloatScalar,
    M: MassFunction<T>,
{
    if x < table.xmin() || x > table.xmax() {
        mass.prob(x)
    } else {
        table.prob(x)
    }
}

/// `P[X <= x]`; below the table the dominant terms are summed directly.
#[cfg(feature = "alloc")]
pub(crate) fn table_cdf<T, M>(mass: &M, table: &DiscreteTable<T>, x: i64) -> T
where
    T: FloatScalar,
    M: MassFunction<T>,
{
    if x < table.xmin() {
        lower_tail_sum(mass, x, TAIL_TERMS)
    } else {
        table.cdf(x)
    }
}

/// `P[X >= x]`; above the table the dominant terms are summed directly.
#[cfg(feature = "alloc")]
pub(crate) fn table_bar_f<T, M>(mass: &M, table: &DiscreteTable<T>, x: i64) -> T
where
    T: FloatScalar,
    M: MassFunction<T>,
{
    if x > table.xmax() {
        upper_tail_sum(mass, x, TAIL_TERMS)
    } else {
        table.bar_f(x)
    }
}

/// `inverse_f_int` of a table-backed family.
///
/// Below the first stored cumulative value the table cannot tell `xmin`
/// from the points under it, so the search continues on `table_cdf`.
#[cfg(feature = "alloc")]
pub(crate) fn table_inverse<T, M>(mass: &M, table: &DiscreteTable<T>, u: T) -> Result<i64>
where
    T: FloatScalar,
    M: MassFunction<T>,
{
    let x = invert(table, u)?;
    let below_table = table.cdf_raw().first().is_some_and(|&first| u < first);
    if u > T::zero() && x == table.xmin() && below_table {
        return Ok(search_int(
            |k| table_cdf(mass, table, k),
            u,
            mass.support(),
            table.xmin(),
            1,
        ));
    }
    Ok(x)
}
