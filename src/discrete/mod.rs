//! Discrete engine: truncated two-sided probability tables.
//!
//! A [`DiscreteTable`] holds the probability terms of an integer-valued
//! distribution over `[xmin, xmax]`, the range outside which every term is
//! negligible, together with a cumulative array split at the median `xmed`:
//!
//! - for `x <= xmed` it stores the lower cdf `P[X <= x]`;
//! - for `x > xmed` it stores the upper tail `P[X >= x]`.
//!
//! Keeping the complementary sum in the upper half avoids computing small
//! upper-tail probabilities as `1 - (number close to 1)`.
//!
//! - [`build_table`] — walk the mass function outward from its mode
//! - [`build_table_from_pmf`] — tabulate explicit (unnormalized) weights
//! - [`invert`] — `inverseF(u)` by binary search, `O(log(xmax - xmin))`
//! - [`lower_tail_sum`] / [`upper_tail_sum`] — a few digits of the cdf or
//!   tail beyond the retained table
//!
//! # Example
//!
//! ```
//! use distinv::discrete::{build_table, invert, MassFunction, TableSettings};
//! use distinv::Support;
//!
//! struct Geometric(f64);
//!
//! impl MassFunction<f64> for Geometric {
//!     fn prob(&self, x: i64) -> f64 {
//!         if x < 0 { 0.0 } else { self.0 * (1.0 - self.0).powi(x as i32) }
//!     }
//!     fn support(&self) -> Support<i64> {
//!         Support::naturals()
//!     }
//!     fn mode(&self) -> i64 {
//!         0
//!     }
//!     fn ratio_up(&self, _x: i64) -> f64 {
//!         1.0 - self.0
//!     }
//! }
//!
//! let table = build_table(&Geometric(0.5), &TableSettings::default()).unwrap();
//! assert_eq!(table.xmin(), 0);
//! assert!((table.cdf(1) - 0.75).abs() < 1e-15);
//! assert_eq!(invert(&table, 0.7).unwrap(), 1);
//! ```

mod builder;
mod inverter;
mod table;


pub use builder::{build_table, build_table_from_pmf};
pub use inverter::invert;
pub use table::DiscreteTable;

use crate::precision::{DEFAULT_TRUNCATION_EPSILON, TRUNCATION_EXTRA};
use crate::support::Support;
use crate::FloatScalar;

/// Probability mass function of an integer-valued distribution.
///
/// The table builder only calls [`prob`](Self::prob) at the mode and walks
/// the tails through the ratio recurrences. Their defaults divide two `prob`
/// values; families with a closed-form recurrence should override them,
/// both for speed and so the walk survives underflow of `prob` itself.
pub trait MassFunction<T: FloatScalar> {
    /// `P[X = x]`, zero outside the support.
    fn prob(&self, x: i64) -> T;

    /// Integer support; the builder never walks past its ends.
    fn support(&self) -> Support<i64>;

    /// A point at (or next to) the maximum of `prob`.
    fn mode(&self) -> i64;

    /// `p(x - 1) / p(x)`.
    fn ratio_down(&self, x: i64) -> T {
        self.prob(x - 1) / self.prob(x)
    }

    /// `p(x + 1) / p(x)`.
    fn ratio_up(&self, x: i64) -> T {
        self.prob(x + 1) / self.prob(x)
    }
}

/// Settings for [`build_table`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSettings<T> {
    /// Global truncation threshold: leading/trailing entries whose cumulative
    /// probability stays below it are dropped.
    pub epsilon: T,
    /// Factor applied to `epsilon` while walking the tails, so terms just
    /// under the threshold still contribute to the normalizing sum.
    pub extra: T,
    /// Initial capacity of the upward walk; doubled whenever it fills up.
    pub initial_capacity: usize,
}

impl<T: FloatScalar> TableSettings<T> {
    /// Replace the truncation threshold.
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl<T: FloatScalar> Default for TableSettings<T> {
    fn default() -> Self {
        Self {
            epsilon: T::lit(DEFAULT_TRUNCATION_EPSILON),
            extra: T::lit(TRUNCATION_EXTRA),
            initial_capacity: 64,
        }
    }
}

/// Approximate `P[X <= x]` by summing `p(x)` and up to `terms` terms below it.
///
/// Meant for `x` below a table's `xmin`, where the terms fall off quickly
/// and a handful of them give the leading digits.
pub fn lower_tail_sum<T, M>(mass: &M, x: i64, terms: usize) -> T
where
    T: FloatScalar,
    M: MassFunction<T> + ?Sized,
{
    let support = mass.support();
    if x < support.lower {
        return T::zero();
    }
    let mut term = mass.prob(x);
    let mut sum = term;
    let mut i = x;
    for _ in 0..terms {
        if i <= support.lower || !(term > T::zero()) {
            break;
        }
        term = term * mass.ratio_down(i);
        i -= 1;
        if term.is_nan() {
            break;
        }
        sum = sum + term;
    }
    sum
}

/// Approximate `P[X >= x]` by summing `p(x)` and up to `terms` terms above it.
///
/// Meant for `x` above a table's `xmax`.
pub fn upper_tail_sum<T, M>(mass: &M, x: i64, terms: usize) -> T
where
    T: FloatScalar,
    M: MassFunction<T> + ?Sized,
{
    let support = mass.support();
    if x > support.upper {
        return T::zero();
    }
    let mut term = mass.prob(x);
    let mut sum = term;
    let mut i = x;
    for _ in 0..terms {
        if i >= support.upper || !(term > T::zero()) {
            break;
        }
        term = term * mass.ratio_up(i);
        i += 1;
        if term.is_nan() {
            break;
        }
        sum = sum + term;
    }
    sum
}
