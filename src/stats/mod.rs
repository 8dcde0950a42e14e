//! The Beta distribution on top of the incomplete beta engine.
//!
//! [`Beta`] implements [`ContinuousDistribution`]: density, CDF, quantile and
//! moments.
//!
//! # Example
//!
//! ```
//! use betafn::stats::{Beta, ContinuousDistribution};
//!
//! let b = Beta::new(2.0_f64, 5.0).unwrap();
//! assert!((b.mean() - 2.0 / 7.0).abs() < 1e-14);
//! assert!((b.cdf(b.quantile(0.3)) - 0.3).abs() < 1e-8);
//! ```

mod beta_dist;


pub use beta_dist::Beta;

/// Errors from distribution construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    InvalidParameter,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    fn quantile(&self, p: T) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}
