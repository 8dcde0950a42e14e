//! Public beta entry points.
//!
//! Each function validates its arguments, widens them to the working type of
//! its [`Precision`], evaluates, and narrows the result with saturation.

use num_traits::Float;
use crate::traits::Precision;
use super::beta_fn::{beta_work, ln_beta_work};
use super::gamma_fn::{GammaProvider, Lanczos};
use super::reduction::{evaluate, Regularized, Unregularized};
use super::{check_shape, check_unit, BetaSettings, SpecialError};

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b).
///
/// Uses the ratio Γ(a) / (Γ(a+b)/Γ(b)) while a + b is below the gamma
/// overflow threshold, and exp(ln B) above it. Results too large for `P`
/// saturate at `P::max_value()`.
///
/// # Errors
///
/// [`SpecialError::DomainError`] unless a and b are finite and positive.
///
/// # Example
///
/// ```
/// use betafn::special::beta;
///
/// // B(1, 1) = 1
/// assert!((beta(1.0_f64, 1.0).unwrap() - 1.0).abs() < 1e-14);
///
/// // B(2, 3) = 1/12
/// assert!((beta(2.0_f64, 3.0).unwrap() - 1.0 / 12.0).abs() < 1e-14);
///
/// assert!(beta(0.0_f64, 1.0).is_err());
/// ```
pub fn beta<P: Precision>(a: P, b: P) -> Result<P, SpecialError> {
    beta_with(a, b, &Lanczos)
}

/// [`beta`] with an explicit gamma provider.
pub fn beta_with<P: Precision, G: GammaProvider<P::Work>>(
    a: P,
    b: P,
    gamma: &G,
) -> Result<P, SpecialError> {
    check_shape(a, b)?;
    Ok(P::narrow(beta_work(a.widen(), b.widen(), gamma)))
}

/// Natural logarithm of the beta function, ln B(a, b).
///
/// # Errors
///
/// [`SpecialError::DomainError`] unless a and b are finite and positive.
///
/// # Example
///
/// ```
/// use betafn::special::ln_beta;
///
/// // ln B(1, 1) = 0
/// assert_eq!(ln_beta(1.0_f64, 1.0).unwrap(), 0.0);
///
/// // Large arguments stay finite
/// assert!(ln_beta(500.0_f64, 800.0).unwrap().is_finite());
/// ```
pub fn ln_beta<P: Precision>(a: P, b: P) -> Result<P, SpecialError> {
    ln_beta_with(a, b, &Lanczos)
}

/// [`ln_beta`] with an explicit gamma provider.
pub fn ln_beta_with<P: Precision, G: GammaProvider<P::Work>>(
    a: P,
    b: P,
    gamma: &G,
) -> Result<P, SpecialError> {
    check_shape(a, b)?;
    Ok(P::narrow(ln_beta_work(a.widen(), b.widen(), gamma)))
}

/// Regularized incomplete beta function I_x(a, b), the CDF of the
/// Beta(a, b) distribution.
///
/// I_x(a, b) = B_x(a, b) / B(a, b) where B_x(a, b) = ∫₀ˣ t^{a−1}(1−t)^{b−1} dt.
///
/// Domain: a > 0, b > 0, 0 ≤ x ≤ 1. I_0 = 0 and I_1 = 1 exactly; the result
/// is always in [0, 1].
///
/// # Errors
///
/// - [`SpecialError::DomainError`] for invalid shapes or x outside [0, 1].
/// - [`SpecialError::ConvergenceFailure`] if the continued fraction exceeds
///   the default iteration limit, or the evaluation produces a non-finite
///   value.
///
/// # Example
///
/// ```
/// use betafn::special::beta_cdf;
///
/// assert_eq!(beta_cdf(0.0_f64, 2.0, 3.0).unwrap(), 0.0);
/// assert_eq!(beta_cdf(1.0_f64, 2.0, 3.0).unwrap(), 1.0);
///
/// // Beta(1, 1) is uniform
/// assert!((beta_cdf(0.3_f64, 1.0, 1.0).unwrap() - 0.3).abs() < 1e-14);
/// ```
pub fn beta_cdf<P: Precision>(x: P, a: P, b: P) -> Result<P, SpecialError> {
    beta_cdf_with(x, a, b, &BetaSettings::default(), &Lanczos)
}

/// [`beta_cdf`] with explicit settings and gamma provider.
///
/// # Errors
///
/// As [`beta_cdf`], plus [`SpecialError::DepthExceeded`] when the shape
/// reduction needs more than `settings.max_depth` steps.
///
/// # Example
///
/// ```
/// use betafn::special::{beta_cdf_with, BetaSettings, Lanczos, SpecialError};
///
/// let tight = BetaSettings { max_iter: 1, ..BetaSettings::default() };
/// let r = beta_cdf_with(0.5_f64, 50.0, 50.0, &tight, &Lanczos);
/// assert_eq!(r, Err(SpecialError::ConvergenceFailure));
/// ```
pub fn beta_cdf_with<P: Precision, G: GammaProvider<P::Work>>(
    x: P,
    a: P,
    b: P,
    settings: &BetaSettings,
    gamma: &G,
) -> Result<P, SpecialError> {
    check_shape(a, b)?;
    check_unit(x)?;

    let zero = P::zero();
    let one = P::one();
    if x == zero {
        return Ok(zero);
    }
    if x == one {
        return Ok(one);
    }

    let family = Regularized { settings, gamma };
    let value = evaluate(&family, x.widen(), a.widen(), b.widen(), settings)?;
    if !value.is_finite() {
        return Err(SpecialError::ConvergenceFailure);
    }
    // Rounding can leave the sum of reduced terms a few ulps outside [0, 1].
    Ok(P::narrow(value).max(zero).min(one))
}

/// Incomplete beta integral B_x(a, b) = ∫₀ˣ t^{a−1}(1−t)^{b−1} dt
/// (unregularized).
///
/// B_1(a, b) = B(a, b). Results too large for `P` saturate at
/// `P::max_value()`.
///
/// # Errors
///
/// - [`SpecialError::DomainError`] for invalid shapes or x outside [0, 1].
/// - [`SpecialError::ConvergenceFailure`] if the continued fraction exceeds
///   the default iteration limit, or the reduction cancels to NaN. An
///   infinite sum saturates like any other overflow.
///
/// # Example
///
/// ```
/// use betafn::special::incomplete_beta;
///
/// // B_x(1, b) = (1 − (1−x)^b) / b
/// let v = incomplete_beta(0.5_f64, 1.0, 2.0).unwrap();
/// assert!((v - 0.375).abs() < 1e-14);
/// ```
pub fn incomplete_beta<P: Precision>(x: P, a: P, b: P) -> Result<P, SpecialError> {
    incomplete_beta_with(x, a, b, &BetaSettings::default(), &Lanczos)
}

/// [`incomplete_beta`] with explicit settings and gamma provider.
///
/// # Errors
///
/// As [`incomplete_beta`], plus [`SpecialError::DepthExceeded`] when the
/// shape reduction needs more than `settings.max_depth` steps.
pub fn incomplete_beta_with<P: Precision, G: GammaProvider<P::Work>>(
    x: P,
    a: P,
    b: P,
    settings: &BetaSettings,
    gamma: &G,
) -> Result<P, SpecialError> {
    check_shape(a, b)?;
    check_unit(x)?;

    let family = Unregularized { settings, gamma };
    let value = evaluate(&family, x.widen(), a.widen(), b.widen(), settings)?;
    if value.is_nan() {
        return Err(SpecialError::ConvergenceFailure);
    }
    Ok(P::narrow(value))
}
