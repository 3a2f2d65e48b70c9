use crate::discrete::{build_table, DiscreteTable, MassFunction, TableSettings};
use crate::error::{Error, Result};
use crate::inverse::check_probability;
use crate::special::{gamma_inc, gamma_inc_upper};
use crate::support::Support;
use crate::FloatScalar;

use super::{
    incomplete_or_nan, search_int, table_bar_f, table_cdf, table_inverse, table_prob,
    DiscreteDistribution,
};

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k! for k = 0, 1, 2, …
///
/// Up to `λ = 100000` the distribution is backed by a [`DiscreteTable`];
/// above that the cdf comes from the incomplete gamma function and
/// `inverse_f_int` bisects over the integers.
///
/// # Example
///
/// ```
/// use distinv::stats::{DiscreteDistribution, Poisson};
///
/// let p = Poisson::new(3.0_f64).unwrap();
/// assert!((p.mean() - 3.0).abs() < 1e-14);
/// assert_eq!(p.inverse_f_int(0.5).unwrap(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poisson<T> {
    mass: PoissonMass<T>,
    table: Option<DiscreteTable<T>>,
}

/// Largest rate that still gets a table.
pub const POISSON_TABLE_LIMIT: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct PoissonMass<T> {
    lambda: T,
}

impl<T: FloatScalar> MassFunction<T> for PoissonMass<T> {
    fn prob(&self, x: i64) -> T {
        if x < 0 {
            return T::zero();
        }
        let k = T::from_i64(x);
        (k * self.lambda.ln() - self.lambda - (k + T::one()).ln_gamma()).exp()
    }

    fn support(&self) -> Support<i64> {
        Support::naturals()
    }

    fn mode(&self) -> i64 {
        self.lambda.floor().to_i64().unwrap_or(0)
    }

    fn ratio_down(&self, x: i64) -> T {
        T::from_i64(x) / self.lambda
    }

    fn ratio_up(&self, x: i64) -> T {
        self.lambda / T::from_i64(x + 1)
    }
}

impl<T: FloatScalar> Poisson<T> {
    /// Create a Poisson distribution with rate `lambda`. Requires `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self> {
        Self::with_settings(lambda, &TableSettings::default())
    }

    /// Like [`new`](Self::new), with explicit table settings.
    pub fn with_settings(lambda: T, settings: &TableSettings<T>) -> Result<Self> {
        if !(lambda > T::zero()) || !lambda.is_finite() {
            return Err(Error::InvalidParameter);
        }
        let mass = PoissonMass { lambda };
        let table = if lambda <= T::lit(POISSON_TABLE_LIMIT) {
            Some(build_table(&mass, settings)?)
        } else {
            None
        };
        Ok(Self { mass, table })
    }

    /// Rate λ.
    pub fn lambda(&self) -> T {
        self.mass.lambda
    }

    /// Backing table, absent above the table limit.
    pub fn table(&self) -> Option<&DiscreteTable<T>> {
        self.table.as_ref()
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Poisson<T> {
    fn prob(&self, x: i64) -> T {
        match &self.table {
            Some(t) => table_prob(&self.mass, t, x),
            None => self.mass.prob(x),
        }
    }

    fn cdf(&self, x: i64) -> T {
        if x < 0 {
            return T::zero();
        }
        match &self.table {
            Some(t) => table_cdf(&self.mass, t, x),
            // P(X ≤ x) = Q(x + 1, λ)
            None => incomplete_or_nan(gamma_inc_upper(T::from_i64(x) + T::one(), self.mass.lambda)),
        }
    }

    fn bar_f(&self, x: i64) -> T {
        if x <= 0 {
            return T::one();
        }
        match &self.table {
            Some(t) => table_bar_f(&self.mass, t, x),
            // P(X ≥ x) = P(x, λ)
            None => incomplete_or_nan(gamma_inc(T::from_i64(x), self.mass.lambda)),
        }
    }

    fn inverse_f_int(&self, u: T) -> Result<i64> {
        if let Some(t) = &self.table {
            return table_inverse(&self.mass, t, u);
        }
        check_probability(u)?;
        if u == T::zero() {
            return Ok(0);
        }
        if u == T::one() {
            return Ok(i64::MAX);
        }
        let lambda = self.mass.lambda;
        let guess = self.mass.mode();
        let step = lambda.sqrt().to_i64().unwrap_or(1);
        Ok(search_int(|x| self.cdf(x), u, Support::naturals(), guess, step))
    }

    fn support(&self) -> Support<i64> {
        Support::naturals()
    }

    fn mean(&self) -> T {
        self.mass.lambda
    }

    fn variance(&self) -> T {
        self.mass.lambda
    }
}
