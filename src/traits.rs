use core::fmt::Debug;
use num_traits::Float;

/// Trait for the real scalar types the inversion engines operate on.
///
/// Blanket behaviour comes from [`num_traits::Float`]; the extra items are
/// constant conversion and the special-function hooks that distribution
/// families need. Special functions delegate to the `libm` crate so they
/// work identically with and without `std`.
///
/// Implemented for `f32` and `f64`.
pub trait FloatScalar: Float + Debug + 'static {
    /// Number of decimal digits the type can represent faithfully.
    const DIGITS: u32;

    /// Convert an `f64` constant into `Self` (rounds for `f32`).
    fn lit(v: f64) -> Self;

    /// Convert an integer abscissa into `Self`.
    fn from_i64(v: i64) -> Self;

    /// Error function.
    fn erf(self) -> Self;

    /// Complementary error function `1 - erf(x)`, accurate in the upper tail.
    fn erfc(self) -> Self;

    /// Natural log of |Γ(x)|.
    fn ln_gamma(self) -> Self;
}

macro_rules! impl_float_scalar {
    ($t:ty, $digits:expr, $erf:path, $erfc:path, $lgamma:path) => {
        impl FloatScalar for $t {
            const DIGITS: u32 = $digits;

            #[inline]
            fn lit(v: f64) -> $t {
                v as $t
            }

            #[inline]
            fn from_i64(v: i64) -> $t {
                v as $t
            }

            #[inline]
            fn erf(self) -> $t {
                $erf(self)
            }

            #[inline]
            fn erfc(self) -> $t {
                $erfc(self)
            }

            #[inline]
            fn ln_gamma(self) -> $t {
                $lgamma(self)
            }
        }
    };
}

impl_float_scalar!(f64, 15, libm::erf, libm::erfc, libm::lgamma);
impl_float_scalar!(f32, 6, libm::erff, libm::erfcf, libm::lgammaf);
