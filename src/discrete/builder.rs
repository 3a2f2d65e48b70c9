use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::support::Support;
use crate::FloatScalar;

use super::{DiscreteTable, MassFunction, TableSettings};

/// Tabulate a mass function around its mode.
///
/// Terms are carried relative to the mode (`p(mode) = 1`) and generated
/// with the ratio recurrences, downward then upward, until a term falls to
/// `epsilon · extra / p(mode)` or the support ends. The walk is then
/// renormalized by its sum, so `p(mode)` only sets the stopping threshold.
///
/// The cumulative array is filled from `xmin` up to the median and from
/// `xmax` down to `xmed + 1`; leading and trailing entries whose cumulative
/// value stays below `epsilon` are dropped.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `settings.epsilon` is not in `(0, 1)`,
///   the mode lies outside the support, or `p(mode)` is not positive.
pub fn build_table<T, M>(mass: &M, settings: &TableSettings<T>) -> Result<DiscreteTable<T>>
where
    T: FloatScalar,
    M: MassFunction<T> + ?Sized,
{
    check_settings(settings)?;
    let support = mass.support();
    let mode = mass.mode();
    if !support.contains(mode) {
        return Err(Error::InvalidParameter);
    }
    let p_mode = mass.prob(mode);
    if !(p_mode > T::zero()) || !p_mode.is_finite() {
        return Err(Error::InvalidParameter);
    }
    let threshold = settings.epsilon * settings.extra / p_mode;

    let mut below: Vec<T> = Vec::new();
    let mut sum = T::one();
    let mut term = T::one();
    let mut x = mode;
    while x > support.lower && term > threshold {
        let next = term * mass.ratio_down(x);
        if !(next >= T::zero()) {
            break;
        }
        term = next;
        x -= 1;
        below.push(term);
        sum = sum + term;
    }
    let xmin = x;

    let mut terms: Vec<T> = Vec::with_capacity(below.len() + settings.initial_capacity.max(1));
    terms.extend(below.iter().rev());
    terms.push(T::one());
    term = T::one();
    x = mode;
    while x < support.upper && term > threshold {
        let next = term * mass.ratio_up(x);
        if !(next >= T::zero()) {
            break;
        }
        if terms.len() == terms.capacity() {
            terms.reserve_exact(terms.capacity());
        }
        term = next;
        x += 1;
        terms.push(term);
        sum = sum + term;
    }

    tracing::debug!(
        xmin,
        xmax = x,
        mode,
        entries = terms.len(),
        "walked mass function"
    );
    finish(xmin, terms, sum, support, settings)
}

/// Tabulate explicit weights for `xmin, xmin + 1, ...`.
///
/// Weights need not be normalized. The support of the resulting table is
/// exactly the tabulated range.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `weights` is empty, holds a negative or
///   non-finite value, sums to zero, or `settings.epsilon` is not in `(0, 1)`.
///
/// # Example
///
/// ```
/// use distinv::discrete::{build_table_from_pmf, TableSettings};
///
/// // fair four-sided die
/// let table = build_table_from_pmf(1, &[1.0; 4], &TableSettings::default()).unwrap();
/// assert_eq!(table.xmed(), 2);
/// assert_eq!(table.bar_f(4), 0.25);
/// ```
pub fn build_table_from_pmf<T: FloatScalar>(
    xmin: i64,
    weights: &[T],
    settings: &TableSettings<T>,
) -> Result<DiscreteTable<T>> {
    check_settings(settings)?;
    if weights.is_empty() || weights.iter().any(|w| !(*w >= T::zero()) || !w.is_finite()) {
        return Err(Error::InvalidParameter);
    }
    let sum = weights.iter().fold(T::zero(), |acc, &w| acc + w);
    if !(sum > T::zero()) {
        return Err(Error::InvalidParameter);
    }
    let support = Support::new(xmin, xmin + weights.len() as i64 - 1)?;
    finish(xmin, weights.to_vec(), sum, support, settings)
}

fn check_settings<T: FloatScalar>(settings: &TableSettings<T>) -> Result<()> {
    if settings.epsilon > T::zero() && settings.epsilon < T::one() {
        Ok(())
    } else {
        Err(Error::InvalidParameter)
    }
}

/// Normalize, accumulate both halves and trim.
fn finish<T: FloatScalar>(
    xmin: i64,
    mut pmf: Vec<T>,
    sum: T,
    support: Support<i64>,
    settings: &TableSettings<T>,
) -> Result<DiscreteTable<T>> {
    for p in pmf.iter_mut() {
        *p = *p / sum;
    }

    let n = pmf.len();
    let last = n - 1;
    let half = T::lit(0.5);
    let mut cdf = alloc::vec![T::zero(); n];

    cdf[0] = pmf[0];
    let mut med = 0;
    while med < last && cdf[med] < half {
        med += 1;
        cdf[med] = cdf[med - 1] + pmf[med];
    }

    if med < last {
        cdf[last] = pmf[last];
        let mut i = last;
        while i > med + 1 {
            i -= 1;
            cdf[i] = pmf[i] + cdf[i + 1];
        }
    }

    let mut lo = 0;
    while lo < med && cdf[lo] < settings.epsilon {
        lo += 1;
    }
    let mut hi = last;
    while hi > med && cdf[hi] < settings.epsilon {
        hi -= 1;
    }
    if lo > 0 || hi < last {
        pmf.truncate(hi + 1);
        pmf.drain(..lo);
        cdf.truncate(hi + 1);
        cdf.drain(..lo);
    }

    let table = DiscreteTable {
        xmin: xmin + lo as i64,
        xmax: xmin + hi as i64,
        xmed: xmin + med as i64,
        support,
        pmf,
        cdf,
    };
    tracing::debug!(
        xmin = table.xmin,
        xmed = table.xmed,
        xmax = table.xmax,
        "built discrete table"
    );
    Ok(table)
}
