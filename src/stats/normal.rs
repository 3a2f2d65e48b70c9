use crate::error::{Error, Result};
use crate::support::Support;
use crate::FloatScalar;

use super::{std_normal_cdf, std_normal_density, ContinuousDistribution};

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// `inverse_f` goes through the continuous engine.
///
/// # Example
///
/// ```
/// use distinv::stats::{ContinuousDistribution, Normal};
///
/// let n = Normal::new(0.0_f64, 1.0).unwrap();
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);
/// assert!((n.inverse_f(0.975).unwrap() - 1.959963984540054).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal<T> {
    mu: T,
    sigma: T,
}

impl<T: FloatScalar> Normal<T> {
    /// Create a normal distribution with mean `mu` and standard deviation `sigma`.
    ///
    /// Requires `sigma > 0` and finite parameters.
    pub fn new(mu: T, sigma: T) -> Result<Self> {
        if !(sigma > T::zero()) || !sigma.is_finite() || !mu.is_finite() {
            return Err(Error::InvalidParameter);
        }
        Ok(Self { mu, sigma })
    }

    fn z(&self, x: T) -> T {
        (x - self.mu) / self.sigma
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Normal<T> {
    fn density(&self, x: T) -> T {
        std_normal_density(self.z(x)) / self.sigma
    }

    fn cdf(&self, x: T) -> T {
        std_normal_cdf(self.z(x))
    }

    fn bar_f(&self, x: T) -> T {
        std_normal_cdf(-self.z(x))
    }

    fn support(&self) -> Support<T> {
        Support::real_line()
    }

    fn mean(&self) -> T {
        self.mu
    }

    fn variance(&self) -> T {
        self.sigma * self.sigma
    }
}
