use crate::discrete::{build_table, DiscreteTable, MassFunction, TableSettings};
use crate::error::{Error, Result};
use crate::support::Support;
use crate::FloatScalar;

use super::{table_bar_f, table_cdf, table_inverse, table_prob, DiscreteDistribution};

/// Negative binomial distribution with real size γ > 0 and success
/// probability p, backed by a [`DiscreteTable`].
///
/// P(X = x) = Γ(γ + x) / (Γ(γ) x!) p^γ (1 − p)^x for x = 0, 1, 2, …
/// (failures before the γ-th success when γ is an integer).
///
/// # Example
///
/// ```
/// use distinv::stats::{DiscreteDistribution, NegativeBinomial};
///
/// // γ = 1 is geometric: P[X >= x] = (1 − p)^x
/// let d = NegativeBinomial::new(1.0_f64, 0.25).unwrap();
/// assert!((d.bar_f(3) - 0.75_f64.powi(3)).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegativeBinomial<T> {
    mass: NegBinMass<T>,
    table: DiscreteTable<T>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct NegBinMass<T> {
    gamma: T,
    p: T,
}

impl<T: FloatScalar> MassFunction<T> for NegBinMass<T> {
    fn prob(&self, x: i64) -> T {
        if x < 0 {
            return T::zero();
        }
        if self.p == T::one() {
            return if x == 0 { T::one() } else { T::zero() };
        }
        let k = T::from_i64(x);
        ((self.gamma + k).ln_gamma() - self.gamma.ln_gamma() - (k + T::one()).ln_gamma()
            + self.gamma * self.p.ln()
            + k * (-self.p).ln_1p())
        .exp()
    }

    fn support(&self) -> Support<i64> {
        Support::naturals()
    }

    fn mode(&self) -> i64 {
        if self.gamma <= T::one() {
            return 0;
        }
        ((self.gamma - T::one()) * (T::one() - self.p) / self.p)
            .floor()
            .to_i64()
            .unwrap_or(0)
    }

    fn ratio_down(&self, x: i64) -> T {
        T::from_i64(x) / ((self.gamma + T::from_i64(x - 1)) * (T::one() - self.p))
    }

    fn ratio_up(&self, x: i64) -> T {
        (self.gamma + T::from_i64(x)) * (T::one() - self.p) / T::from_i64(x + 1)
    }
}

impl<T: FloatScalar> NegativeBinomial<T> {
    /// Requires `gamma > 0` finite and `0 < p <= 1`.
    pub fn new(gamma: T, p: T) -> Result<Self> {
        Self::with_settings(gamma, p, &TableSettings::default())
    }

    /// Like [`new`](Self::new), with explicit table settings.
    pub fn with_settings(gamma: T, p: T, settings: &TableSettings<T>) -> Result<Self> {
        if !(gamma > T::zero()) || !gamma.is_finite() || !(p > T::zero() && p <= T::one()) {
            return Err(Error::InvalidParameter);
        }
        let mass = NegBinMass { gamma, p };
        let table = build_table(&mass, settings)?;
        Ok(Self { mass, table })
    }

    /// Size γ.
    pub fn gamma(&self) -> T {
        self.mass.gamma
    }

    /// Success probability.
    pub fn p(&self) -> T {
        self.mass.p
    }

    /// Backing table.
    pub fn table(&self) -> &DiscreteTable<T> {
        &self.table
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for NegativeBinomial<T> {
    fn prob(&self, x: i64) -> T {
        table_prob(&self.mass, &self.table, x)
    }

    fn cdf(&self, x: i64) -> T {
        table_cdf(&self.mass, &self.table, x)
    }

    fn bar_f(&self, x: i64) -> T {
        table_bar_f(&self.mass, &self.table, x)
    }

    fn inverse_f_int(&self, u: T) -> Result<i64> {
        table_inverse(&self.mass, &self.table, u)
    }

    fn support(&self) -> Support<i64> {
        Support::naturals()
    }

    fn mean(&self) -> T {
        self.mass.gamma * (T::one() - self.mass.p) / self.mass.p
    }

    fn variance(&self) -> T {
        self.mass.gamma * (T::one() - self.mass.p) / (self.mass.p * self.mass.p)
    }
}
