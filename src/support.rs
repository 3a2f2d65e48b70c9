//! Support intervals of probability distributions.

use crate::error::{Error, Result};

/// Closed interval `[lower, upper]` outside which density or mass is zero.
///
/// Bounds may be infinite for real supports, or `i64::MIN` / `i64::MAX`
/// for integer supports with no finite edge.
///
/// # Example
///
/// ```
/// use distinv::Support;
///
/// let s = Support::new(0.0_f64, 1.0).unwrap();
/// assert!(s.contains(0.5));
/// assert_eq!(s.clamp(2.0), 1.0);
/// assert!(Support::new(1.0_f64, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Support<X> {
    /// Smallest point of the support.
    pub lower: X,
    /// Largest point of the support.
    pub upper: X,
}

impl<X: PartialOrd + Copy> Support<X> {
    /// Create a support interval. Requires `lower <= upper`; NaN bounds are rejected.
    pub fn new(lower: X, upper: X) -> Result<Self> {
        if !(lower <= upper) {
            return Err(Error::InvalidParameter);
        }
        Ok(Self { lower, upper })
    }

    /// True if `x` lies in `[lower, upper]`.
    pub fn contains(&self, x: X) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Nearest point of the support to `x`.
    pub fn clamp(&self, x: X) -> X {
        if x < self.lower {
            self.lower
        } else if x > self.upper {
            self.upper
        } else {
            x
        }
    }
}

impl<T: num_traits::Float> Support<T> {
    /// `(-∞, ∞)`.
    pub fn real_line() -> Self {
        Self {
            lower: T::neg_infinity(),
            upper: T::infinity(),
        }
    }

    /// `[0, ∞)`.
    pub fn positive() -> Self {
        Self {
            lower: T::zero(),
            upper: T::infinity(),
        }
    }
}

impl Support<i64> {
    /// `{0, 1, 2, …}`, with `i64::MAX` standing in for infinity.
    pub fn naturals() -> Self {
        Self {
            lower: 0,
            upper: i64::MAX,
        }
    }
}
