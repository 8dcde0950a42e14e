use crate::special::{beta_cdf, ln_beta};
use crate::traits::Precision;
use super::{ContinuousDistribution, StatsError};

/// Iteration cap for the quantile solver. Bisection alone narrows [0, 1]
/// below f64 resolution well within it.
const QUANTILE_MAX_ITER: usize = 100;

/// Beta distribution with shape parameters α and β on [0, 1].
///
/// f(x) = x^{α−1} (1−x)^{β−1} / B(α, β) for 0 ≤ x ≤ 1.
///
/// The CDF is [`beta_cdf`]; ln B(α, β) is computed once at construction.
///
/// # Example
///
/// ```
/// use betafn::stats::{Beta, ContinuousDistribution};
///
/// let b = Beta::new(2.0_f64, 5.0).unwrap();
/// assert!((b.mean() - 2.0/7.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Beta<T> {
    alpha: T,
    beta: T,
    ln_norm: T,
}

impl<T: Precision> Beta<T> {
    /// Create a Beta distribution with shape parameters `alpha` and `beta`.
    /// Requires both finite and > 0.
    pub fn new(alpha: T, beta: T) -> Result<Self, StatsError> {
        let ln_norm = ln_beta(alpha, beta).map_err(|_| StatsError::InvalidParameter)?;
        Ok(Self { alpha, beta, ln_norm })
    }

    /// Shape parameter α.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Shape parameter β.
    pub fn beta(&self) -> T {
        self.beta
    }

    /// Newton steps on cdf(x) − p, kept inside a shrinking bracket of the
    /// support. Falls back to bisection where the density is zero or
    /// infinite (the endpoints for shapes below one) or where a step would
    /// leave the bracket.
    fn invert_cdf(&self, p: T) -> T {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let tol = T::epsilon() * T::from(1000.0).unwrap();

        let (mut lo, mut hi) = (zero, one);
        let mut x = self.mean();
        for _ in 0..QUANTILE_MAX_ITER {
            let residual = self.cdf(x) - p;
            if residual.abs() < tol {
                break;
            }
            if residual < zero {
                lo = x;
            } else {
                hi = x;
            }
            if hi - lo <= T::epsilon() {
                break;
            }
            let density = self.pdf(x);
            let step = x - residual / density;
            x = if density > zero && density.is_finite() && step > lo && step < hi {
                step
            } else {
                (lo + hi) / two
            };
        }
        x
    }
}

/// c·ln(v), taken as 0 when c = 0 so that the boundary density stays finite.
#[inline]
fn scaled_ln<T: Precision>(c: T, v: T) -> T {
    if c == T::zero() {
        T::zero()
    } else {
        c * v.ln()
    }
}

impl<T: Precision> ContinuousDistribution<T> for Beta<T> {
    fn pdf(&self, x: T) -> T {
        if x < T::zero() || x > T::one() {
            return T::zero();
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() || x > T::one() {
            return T::neg_infinity();
        }
        let one = T::one();
        scaled_ln(self.alpha - one, x) + scaled_ln(self.beta - one, one - x) - self.ln_norm
    }

    fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        if x >= T::one() {
            return T::one();
        }
        beta_cdf(x, self.alpha, self.beta).unwrap_or(T::nan())
    }

    /// 0 for p ≤ 0, 1 for p ≥ 1, NaN for NaN.
    fn quantile(&self, p: T) -> T {
        if p.is_nan() {
            return p;
        }
        if p <= T::zero() {
            return T::zero();
        }
        if p >= T::one() {
            return T::one();
        }
        self.invert_cdf(p)
    }

    fn mean(&self) -> T {
        self.alpha / (self.alpha + self.beta)
    }

    fn variance(&self) -> T {
        let ab = self.alpha + self.beta;
        self.alpha * self.beta / (ab * ab * (ab + T::one()))
    }
}
