//! Beta function and log-beta in the working type.
//!
//! Below the gamma overflow threshold both are formed from the ratio
//! Γ(a) / (Γ(a+b)/Γ(b)), which never builds Γ(a+b) or Γ(a)·Γ(b) on its own.
//! Above it, or when Γ(a) or Γ(b) alone overflows for a subnormal shape,
//! they fall back to ln Γ.

use crate::traits::WorkingFloat;
use super::gamma_fn::GammaProvider;

/// B(a, b) for a, b > 0, saturating at `T::max_value()`.
pub(crate) fn beta_work<T: WorkingFloat, G: GammaProvider<T>>(a: T, b: T, gamma: &G) -> T {
    if a + b <= gamma.max_arg() {
        let direct = beta_direct(a, b, gamma);
        if direct.is_finite() {
            return direct;
        }
    }
    let ln_beta = beta_from_logs(a, b, gamma);
    if ln_beta > T::LN_MAX {
        T::max_value()
    } else {
        ln_beta.exp()
    }
}

/// ln B(a, b) for a, b > 0.
pub(crate) fn ln_beta_work<T: WorkingFloat, G: GammaProvider<T>>(a: T, b: T, gamma: &G) -> T {
    let one = T::one();
    if a == one && b == one {
        return T::zero();
    }
    if a + b <= gamma.max_arg() {
        let direct = beta_direct(a, b, gamma);
        if direct.is_finite() {
            return direct.ln();
        }
    }
    beta_from_logs(a, b, gamma)
}

/// Γ(a) / (Γ(a+b) / Γ(b)). Requires a + b ≤ `gamma.max_arg()`; infinite
/// when a or b is so small that Γ of it overflows.
#[inline]
pub(crate) fn beta_direct<T: WorkingFloat, G: GammaProvider<T>>(a: T, b: T, gamma: &G) -> T {
    gamma.gamma(a) / (gamma.gamma(a + b) / gamma.gamma(b))
}

/// ln Γ(a) + ln Γ(b) − ln Γ(a+b).
#[inline]
pub(crate) fn beta_from_logs<T: WorkingFloat, G: GammaProvider<T>>(a: T, b: T, gamma: &G) -> T {
    gamma.ln_gamma(a) + gamma.ln_gamma(b) - gamma.ln_gamma(a + b)
}
