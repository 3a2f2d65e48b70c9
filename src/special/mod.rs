//! Special functions the distribution families need beyond the
//! [`FloatScalar`](crate::FloatScalar) hooks.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma_inc`] | Regularized lower incomplete gamma P(a,x) |
//! | [`gamma_inc_upper`] | Regularized upper incomplete gamma Q(a,x) = 1−P(a,x) |
//!
//! `erf`, `erfc` and `ln_gamma` come from `libm` through
//! [`FloatScalar`](crate::FloatScalar).
//!
//! # Example
//!
//! ```
//! use distinv::special::{gamma_inc, gamma_inc_upper};
//!
//! // P(1, x) = 1 − e^{−x}
//! assert!((gamma_inc(1.0_f64, 2.0).unwrap() - (1.0 - (-2.0_f64).exp())).abs() < 1e-14);
//! assert!((gamma_inc_upper(1.0_f64, 2.0).unwrap() - (-2.0_f64).exp()).abs() < 1e-14);
//! ```

mod incgamma;


pub use incgamma::{gamma_inc, gamma_inc_upper};
