use alloc::vec::Vec;

use crate::support::Support;
use crate::FloatScalar;

/// Truncated probability table of an integer-valued distribution.
///
/// Entries are indexed by `x - xmin`. The cumulative array is two-sided:
/// `cdf_raw()[x - xmin]` is `P[X <= x]` for `x <= xmed` and `P[X >= x]` for
/// `x > xmed`. Both halves are monotone toward the median.
///
/// Built by [`build_table`](super::build_table) or
/// [`build_table_from_pmf`](super::build_table_from_pmf); immutable
/// afterwards, so it can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteTable<T> {
    pub(super) xmin: i64,
    pub(super) xmax: i64,
    pub(super) xmed: i64,
    pub(super) support: Support<i64>,
    pub(super) pmf: Vec<T>,
    pub(super) cdf: Vec<T>,
}

impl<T: FloatScalar> DiscreteTable<T> {
    /// Smallest retained value.
    pub fn xmin(&self) -> i64 {
        self.xmin
    }

    /// Largest retained value.
    pub fn xmax(&self) -> i64 {
        self.xmax
    }

    /// Smallest `x` with `P[X <= x] >= 1/2`, or `xmax` when rounding keeps
    /// the lower sum under one half.
    pub fn xmed(&self) -> i64 {
        self.xmed
    }

    /// Support of the distribution the table was built from. Wider than
    /// `[xmin, xmax]` in general.
    pub fn support(&self) -> Support<i64> {
        self.support
    }

    /// Number of retained entries, `xmax - xmin + 1`.
    pub fn len(&self) -> usize {
        self.pmf.len()
    }

    /// Always false: a table keeps at least the mode.
    pub fn is_empty(&self) -> bool {
        self.pmf.is_empty()
    }

    /// Normalized probability terms over `[xmin, xmax]`.
    pub fn pmf(&self) -> &[T] {
        &self.pmf
    }

    /// Two-sided cumulative array over `[xmin, xmax]`.
    pub fn cdf_raw(&self) -> &[T] {
        &self.cdf
    }

    fn index(&self, x: i64) -> usize {
        (x - self.xmin) as usize
    }

    /// `P[X = x]`; zero outside `[xmin, xmax]`.
    pub fn prob(&self, x: i64) -> T {
        if x < self.xmin || x > self.xmax {
            T::zero()
        } else {
            self.pmf[self.index(x)]
        }
    }

    /// `P[X <= x]` from the table: 0 below `xmin`, 1 from `xmax` on.
    pub fn cdf(&self, x: i64) -> T {
        if x < self.xmin {
            T::zero()
        } else if x >= self.xmax {
            T::one()
        } else if x <= self.xmed {
            self.cdf[self.index(x)]
        } else {
            T::one() - self.cdf[self.index(x + 1)]
        }
    }

    /// `P[X >= x]` from the table: 1 up to `xmin`, 0 above `xmax`.
    pub fn bar_f(&self, x: i64) -> T {
        if x <= self.xmin {
            T::one()
        } else if x > self.xmax {
            T::zero()
        } else if x > self.xmed {
            self.cdf[self.index(x)]
        } else {
            T::one() - self.cdf[self.index(x - 1)]
        }
    }

    /// Sum of the retained terms; `1` up to the truncated mass and rounding.
    pub fn total_mass(&self) -> T {
        self.pmf.iter().fold(T::zero(), |acc, &p| acc + p)
    }

    /// `P[X <= x]` for every retained `x`, computed from the two-sided array.
    pub fn unfolded_cdf(&self) -> Vec<T> {
        let med = self.index(self.xmed);
        let last = self.pmf.len() - 1;
        (0..=last)
            .map(|i| {
                if i <= med {
                    self.cdf[i]
                } else if i == last {
                    T::one()
                } else {
                    T::one() - self.cdf[i + 1]
                }
            })
            .collect()
    }
}
