use crate::discrete::{build_table, DiscreteTable, MassFunction, TableSettings};
use crate::error::{Error, Result};
use crate::support::Support;
use crate::FloatScalar;

use super::{table_bar_f, table_cdf, table_inverse, table_prob, DiscreteDistribution};

/// Binomial distribution B(n, p), backed by a [`DiscreteTable`].
///
/// P(X = k) = C(n,k) p^k (1−p)^{n−k} for k = 0, …, n.
///
/// # Example
///
/// ```
/// use distinv::stats::{Binomial, DiscreteDistribution};
///
/// let b = Binomial::new(10, 0.5_f64).unwrap();
/// assert!((b.mean() - 5.0).abs() < 1e-14);
/// assert!((b.cdf(4) + b.bar_f(5) - 1.0).abs() < 1e-14);
/// assert_eq!(b.inverse_f_int(0.5).unwrap(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binomial<T> {
    mass: BinomialMass<T>,
    table: DiscreteTable<T>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct BinomialMass<T> {
    n: i64,
    p: T,
}

impl<T: FloatScalar> MassFunction<T> for BinomialMass<T> {
    fn prob(&self, x: i64) -> T {
        if x < 0 || x > self.n {
            return T::zero();
        }
        let one = T::one();
        // degenerate ends, where 0·ln 0 would give NaN
        if self.p == T::zero() || self.p == one {
            let at = if self.p == T::zero() { 0 } else { self.n };
            return if x == at { one } else { T::zero() };
        }
        let nf = T::from_i64(self.n);
        let kf = T::from_i64(x);
        ((nf + one).ln_gamma() - (kf + one).ln_gamma() - (nf - kf + one).ln_gamma()
            + kf * self.p.ln()
            + (nf - kf) * (-self.p).ln_1p())
        .exp()
    }

    fn support(&self) -> Support<i64> {
        Support {
            lower: 0,
            upper: self.n,
        }
    }

    fn mode(&self) -> i64 {
        let m = (T::from_i64(self.n + 1) * self.p).floor().to_i64().unwrap_or(0);
        m.clamp(0, self.n)
    }

    fn ratio_down(&self, x: i64) -> T {
        let q = T::one() - self.p;
        T::from_i64(x) * q / (T::from_i64(self.n - x + 1) * self.p)
    }

    fn ratio_up(&self, x: i64) -> T {
        let q = T::one() - self.p;
        T::from_i64(self.n - x) * self.p / (T::from_i64(x + 1) * q)
    }
}

impl<T: FloatScalar> Binomial<T> {
    /// Create a binomial distribution with `n >= 1` trials and success
    /// probability `0 <= p <= 1`.
    pub fn new(n: i64, p: T) -> Result<Self> {
        Self::with_settings(n, p, &TableSettings::default())
    }

    /// Like [`new`](Self::new), with explicit table settings.
    pub fn with_settings(n: i64, p: T, settings: &TableSettings<T>) -> Result<Self> {
        if n < 1 || !(p >= T::zero() && p <= T::one()) {
            return Err(Error::InvalidParameter);
        }
        let mass = BinomialMass { n, p };
        let table = build_table(&mass, settings)?;
        Ok(Self { mass, table })
    }

    /// Number of trials.
    pub fn n(&self) -> i64 {
        self.mass.n
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

impl<T: FloatScalar> DiscreteDistribution<T> for Binomial<T> {
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
        self.mass.support()
    }

    fn mean(&self) -> T {
        T::from_i64(self.mass.n) * self.mass.p
    }

    fn variance(&self) -> T {
        T::from_i64(self.mass.n) * self.mass.p * (T::one() - self.mass.p)
    }
}
