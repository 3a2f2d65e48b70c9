use crate::error::{Error, Result};
use crate::inverse::check_probability;
use crate::support::Support;
use crate::FloatScalar;

use super::ContinuousDistribution;

/// Exponential distribution with rate λ.
///
/// f(x) = λ exp(−λx) for x ≥ 0. The inverse has a closed form and skips
/// the solver.
///
/// # Example
///
/// ```
/// use distinv::stats::{ContinuousDistribution, Exponential};
///
/// let e = Exponential::new(2.0_f64).unwrap();
/// assert!((e.mean() - 0.5).abs() < 1e-14);
/// assert!((e.inverse_f(0.5).unwrap() - 2.0_f64.ln() / 2.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exponential<T> {
    lambda: T,
}

impl<T: FloatScalar> Exponential<T> {
    /// Create an exponential distribution with rate `lambda`. Requires `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self> {
        if !(lambda > T::zero()) || !lambda.is_finite() {
            return Err(Error::InvalidParameter);
        }
        Ok(Self { lambda })
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Exponential<T> {
    fn density(&self, x: T) -> T {
        if x < T::zero() {
            T::zero()
        } else {
            self.lambda * (-self.lambda * x).exp()
        }
    }

    fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            T::zero()
        } else {
            -(-self.lambda * x).exp_m1()
        }
    }

    fn bar_f(&self, x: T) -> T {
        if x <= T::zero() {
            T::one()
        } else {
            (-self.lambda * x).exp()
        }
    }

    fn support(&self) -> Support<T> {
        Support::positive()
    }

    fn inverse_f(&self, u: T) -> Result<T> {
        check_probability(u)?;
        if u == T::zero() {
            return Ok(T::zero());
        }
        Ok(-(-u).ln_1p() / self.lambda)
    }

    fn mean(&self) -> T {
        self.lambda.recip()
    }

    fn variance(&self) -> T {
        (self.lambda * self.lambda).recip()
    }
}
