//! # betafn
//!
//! The Beta function, its logarithm, and the incomplete Beta function (the
//! Beta distribution CDF), no-std compatible and allocation-free.
//!
//! ## Quick start
//!
//! ```
//! use betafn::special::{beta, beta_cdf, incomplete_beta};
//!
//! let b = beta(2.0_f64, 3.0).unwrap();            // 1/12
//! let p = beta_cdf(0.4_f64, 2.0, 3.0).unwrap();   // I_0.4(2, 3)
//! let i = incomplete_beta(0.4_f64, 2.0, 3.0).unwrap();
//! assert!((i - p * b).abs() < 1e-14);
//! ```
//!
//! ## Modules
//!
//! - [`special`] — [`beta`](special::beta), [`ln_beta`](special::ln_beta),
//!   [`beta_cdf`](special::beta_cdf) and
//!   [`incomplete_beta`](special::incomplete_beta), plus the Lanczos
//!   [`gamma`](special::gamma) / [`lgamma`](special::lgamma) they are built on.
//!   The incomplete functions evaluate a continued fraction for a > 1, b > 1
//!   and reduce every other shape onto it (or onto a closed form) with the
//!   recurrences of the incomplete beta integral.
//!
//! - [`stats`] — [`Beta`](stats::Beta) distribution: pdf, cdf, quantile,
//!   mean, variance.
//!
//! - [`traits`] — Element traits:
//!   - [`FloatScalar`] — real floats (`f32`, `f64`)
//!   - [`WorkingFloat`] — evaluation type with its named thresholds
//!     (gamma overflow argument, ln of the largest finite value, continued
//!     fraction tolerance)
//!   - [`Precision`] — public type, widened for evaluation and narrowed with
//!     saturation afterwards
//!
//! ## Numeric policy
//!
//! `f32` arguments are evaluated in `f64`. Values beyond the public type's
//! range saturate at its largest finite value rather than becoming infinite.
//! Invalid arguments, continued fraction non-convergence and runaway shape
//! reduction are reported as [`SpecialError`](special::SpecialError).
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `tracing` | no       | `tracing` events on convergence and evaluation failures |
//!
//! Without `std`, math goes through the pure-Rust `libm` fallback.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod special;
pub mod stats;
pub mod traits;

pub use special::{beta, beta_cdf, incomplete_beta, ln_beta, BetaSettings, SpecialError};
pub use traits::{FloatScalar, Precision, Scalar, WorkingFloat};
