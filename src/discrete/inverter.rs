use crate::error::{Error, Result};
use crate::FloatScalar;

use super::DiscreteTable;

/// Smallest `x` with `P[X <= x] >= u`, looked up in a [`DiscreteTable`].
///
/// `u = 0` and `u = 1` map to the ends of the distribution's support. For
/// `u <= cdf[xmed]` the lower half is searched for the first entry `>= u`.
/// Otherwise, with `v = 1 - u`, the upper half is searched for the first
/// `k` whose stored tail `P[X >= k]` is `<= v`, and `k - 1` is returned;
/// values of `v` below the last stored tail give `xmax`.
///
/// # Errors
///
/// Returns [`Error::ProbabilityOutOfRange`] if `u ∉ [0, 1]`.
pub fn invert<T: FloatScalar>(table: &DiscreteTable<T>, u: T) -> Result<i64> {
    if !(u >= T::zero() && u <= T::one()) {
        return Err(Error::ProbabilityOutOfRange);
    }
    if u == T::zero() {
        return Ok(table.support.lower);
    }
    if u == T::one() {
        return Ok(table.support.upper);
    }

    let med = (table.xmed - table.xmin) as usize;
    let cdf = &table.cdf;
    if u <= cdf[med] {
        let k = cdf[..=med].partition_point(|&c| c < u);
        Ok(table.xmin + k as i64)
    } else {
        let v = T::one() - u;
        // stored tails decrease with k; an empty upper half lands on xmax
        let k = med + 1 + cdf[med + 1..].partition_point(|&c| c > v);
        Ok(table.xmin + k as i64 - 1)
    }
}
