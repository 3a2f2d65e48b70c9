//! Precision budgets and the numeric constants shared by both engines.

use crate::error::{Error, Result};
use crate::FloatScalar;

/// `EPS_ARRAY[d] = 0.5 · 10^-d`: absolute tolerance for `d` correct decimals.
pub const EPS_ARRAY: [f64; 36] = [
    0.5, 0.5e-1, 0.5e-2, 0.5e-3, 0.5e-4, 0.5e-5, 0.5e-6, 0.5e-7, 0.5e-8, 0.5e-9, 0.5e-10,
    0.5e-11, 0.5e-12, 0.5e-13, 0.5e-14, 0.5e-15, 0.5e-16, 0.5e-17, 0.5e-18, 0.5e-19, 0.5e-20,
    0.5e-21, 0.5e-22, 0.5e-23, 0.5e-24, 0.5e-25, 0.5e-26, 0.5e-27, 0.5e-28, 0.5e-29, 0.5e-30,
    0.5e-31, 0.5e-32, 0.5e-33, 0.5e-34, 0.5e-35,
];

/// Largest digit count covered by [`EPS_ARRAY`].
pub const MAX_DIGITS: u32 = (EPS_ARRAY.len() - 1) as u32;

/// Digits requested when a caller does not say otherwise.
pub const DEFAULT_DIGITS: u32 = 15;

/// Initial half-width of the bracket search window around 0.
pub const BRACKET_HALF_WIDTH: f64 = 8.0;

/// The bracket search stops doubling once a bound passes this magnitude.
pub const BRACKET_CEILING: f64 = f64::MAX / 2.0;

/// Global truncation threshold for discrete tables.
pub const DEFAULT_TRUNCATION_EPSILON: f64 = 1e-16;

/// Extra factor applied to the truncation threshold while walking the
/// tails, so the retained mass is accurate before the final trim.
pub const TRUNCATION_EXTRA: f64 = 1e-6;

/// Number of dominant terms summed for cdf/barF values outside a table.
pub const TAIL_TERMS: usize = 20;

/// Requested number of correct decimal digits, validated against [`EPS_ARRAY`].
///
/// # Example
///
/// ```
/// use distinv::PrecisionBudget;
///
/// let p = PrecisionBudget::new(10).unwrap();
/// assert_eq!(p.epsilon::<f64>(), 0.5e-10);
/// assert!(PrecisionBudget::new(36).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionBudget {
    digits: u32,
}

impl PrecisionBudget {
    /// Budget of `digits` decimals. Requires `digits <= 35`.
    pub fn new(digits: u32) -> Result<Self> {
        if digits > MAX_DIGITS {
            return Err(Error::PrecisionOutOfRange);
        }
        Ok(Self { digits })
    }

    /// Budget of `digits` decimals, capped at [`MAX_DIGITS`].
    pub const fn saturating(digits: u32) -> Self {
        let digits = if digits > MAX_DIGITS { MAX_DIGITS } else { digits };
        Self { digits }
    }

    /// Requested digit count.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Absolute tolerance `0.5 · 10^-digits`.
    pub fn epsilon<T: FloatScalar>(&self) -> T {
        T::lit(EPS_ARRAY[self.digits as usize])
    }
}

impl Default for PrecisionBudget {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
        }
    }
}
