//! # distinv
//!
//! Numerical evaluation engine for probability distributions, no-std
//! compatible. Two engines cover the families that have no closed-form
//! inverse or tail sum:
//!
//! - a derivative-free inverter for nondecreasing functions (bracket search,
//!   Brent–Dekker, bisection), giving `inverseF(u)` for any continuous
//!   distribution from its `cdf` alone;
//! - a discrete table engine that tabulates a mass function with controlled
//!   truncation error, keeps the cumulative sums two-sided around the
//!   median, and inverts by binary search.
//!
//! ## Quick start
//!
//! ```
//! use distinv::inverse::{inverse_brent, RootSettings};
//! use distinv::Support;
//!
//! // Inverse of F(x) = x² on [0, 1]
//! let r = inverse_brent(&|x: f64| x * x, 0.25, Support::new(0.0, 1.0).unwrap(), &RootSettings::default())
//!     .unwrap();
//! assert!(r.converged);
//! assert!((r.x - 0.5).abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`inverse`] — [`find_bracket`](inverse::find_bracket),
//!   [`solve`](inverse::solve), [`bisect`](inverse::bisect) and the combined
//!   [`inverse_brent`](inverse::inverse_brent) /
//!   [`inverse_bisection`](inverse::inverse_bisection). Non-convergence is a
//!   flag on [`Inversion`](inverse::Inversion), not an error.
//!
//! - [`discrete`] — [`MassFunction`](discrete::MassFunction),
//!   [`build_table`](discrete::build_table), [`DiscreteTable`](discrete::DiscreteTable)
//!   and [`invert`](discrete::invert). Requires `alloc`.
//!
//! - [`stats`] — [`ContinuousDistribution`](stats::ContinuousDistribution) /
//!   [`DiscreteDistribution`](stats::DiscreteDistribution) and the families
//!   built on the engines.
//!
//! - [`special`] — regularized incomplete gamma.
//!
//! - [`precision`] — [`PrecisionBudget`] and the shared numeric constants.
//!
//! - [`traits`] — [`FloatScalar`], implemented for `f32` and `f64`.
//!
//! ## Logging
//!
//! Solver non-convergence and ceiling hits are reported as `tracing`
//! warnings; table construction emits `debug` events. No subscriber is
//! installed.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc` |
//! | `alloc` | via std | Discrete tables and table-backed families |
//! | `serde` | no      | `Serialize` / `Deserialize` for settings, supports, tables and families |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod discrete;
pub mod error;
pub mod inverse;
pub mod precision;
pub mod special;
pub mod stats;
pub mod support;
pub mod traits;

#[cfg(all(test, feature = "std"))]
mod testing;

pub use error::{Error, Result};
pub use inverse::{Inversion, MonotoneFunction, RootSettings};
pub use precision::PrecisionBudget;
pub use support::Support;
pub use traits::FloatScalar;
