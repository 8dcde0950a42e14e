//! Continued fraction for the regularized incomplete beta function.
//!
//! I_x(a,b) = x^a (1−x)^b / (a·B(a,b)) · 1/(1 + d₁/(1 + d₂/(1 + …)))
//!
//! with
//!
//! - d_{2m+1} = −(a+m)(a+b+m)·x / ((a+2m)(a+2m+1))
//! - d_{2m}   = m(b−m)·x / ((a+2m−1)(a+2m))
//!
//! The convergents A_n/B_n follow the three-term recurrence
//! A_{n+1} = A_n + d·A_{n−1} (same for B). Convergence is fast for
//! a > 1, b > 1 and x up to the mode (a−1)/(a+b−2).

use crate::traits::WorkingFloat;
use super::beta_fn::ln_beta_work;
use super::gamma_fn::GammaProvider;
use super::{BetaSettings, SpecialError};

/// The two convergents compared for the stopping test.
///
/// Updates cycle through a two-bit phase; phase 1 refreshes `less` and
/// phase 3 refreshes `greater`, so the pair is always two full
/// iterations apart.
struct Approximants<T> {
    less: T,
    greater: T,
    phase: u8,
}

impl<T: WorkingFloat> Approximants<T> {
    fn new(first: T) -> Self {
        Self {
            less: first,
            greater: T::zero(),
            phase: 1,
        }
    }

    #[inline]
    fn record(&mut self, numerator: T, denominator: T) {
        self.phase = (self.phase + 1) & 3;
        match self.phase {
            1 => self.less = numerator / denominator,
            3 => self.greater = numerator / denominator,
            _ => {}
        }
    }

    /// 2·|f₊ − f₋| ≤ eps·|f₊ + f₋|. NaN or infinite samples never converge.
    #[inline]
    fn converged(&self) -> bool {
        if !(self.less.is_finite() && self.greater.is_finite()) {
            return false;
        }
        let two = T::one() + T::one();
        two * (self.greater - self.less).abs() <= T::CF_EPS * (self.greater + self.less).abs()
    }
}

/// The last two numerators and denominators of the three-term recurrence.
struct Convergents<T> {
    num_prev: T,
    num: T,
    den_prev: T,
    den: T,
}

impl<T: WorkingFloat> Convergents<T> {
    /// A_{n+1} = A_n + d·A_{n−1}, B_{n+1} = B_n + d·B_{n−1}.
    #[inline]
    fn next(&self, d: T) -> (T, T) {
        (self.num + d * self.num_prev, self.den + d * self.den_prev)
    }

    /// Shift the window onto (num_next, den_next).
    ///
    /// All four terms are divided by `den_next` whenever it leaves
    /// [ε, 1]. The ratios are unchanged and the magnitudes stay away from
    /// overflow and from the subnormal range, where the denominator would
    /// otherwise decay to zero for large shapes.
    #[inline]
    fn shift(&mut self, num_next: T, den_next: T) {
        let scale = den_next.abs();
        if scale != T::zero() && (scale > T::one() || scale < T::epsilon()) {
            self.num_prev = self.num / den_next;
            self.num = num_next / den_next;
            self.den_prev = self.den / den_next;
            self.den = T::one();
        } else {
            self.num_prev = self.num;
            self.num = num_next;
            self.den_prev = self.den;
            self.den = den_next;
        }
    }
}

/// Regularized incomplete beta I_x(a, b) by continued fraction.
///
/// Requires a > 1, b > 1 and 0 ≤ x ≤ (a−1)/(a+b−2); callers outside that
/// region go through the shape reduction first.
///
/// # Errors
///
/// Returns [`SpecialError::ConvergenceFailure`] if the stopping test is not
/// met within `settings.max_iter` iterations, or if the converged ratio is
/// not a finite positive number.
pub(crate) fn continued_fraction<T: WorkingFloat, G: GammaProvider<T>>(
    x: T,
    a: T,
    b: T,
    settings: &BetaSettings,
    gamma: &G,
) -> Result<T, SpecialError> {
    let zero = T::zero();
    let one = T::one();

    debug_assert!(a > one && b > one);

    if x == zero {
        return Ok(zero);
    }

    let mut conv = Convergents {
        num_prev: one,
        num: zero,
        den_prev: zero,
        den: one,
    };
    let (mut num_next, mut den_next) = conv.next(one);
    let mut approx = Approximants::new(num_next / den_next);

    let mut m = 0usize;
    let mut aj = a;
    let mut iterations = 0usize;

    while !approx.converged() {
        if iterations == settings.max_iter {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                x = ?x,
                a = ?a,
                b = ?b,
                max_iter = settings.max_iter,
                "incomplete beta continued fraction did not converge"
            );
            return Err(SpecialError::ConvergenceFailure);
        }
        iterations += 1;

        // Odd coefficient d_{2m+1}.
        conv.shift(num_next, den_next);
        let am = a + T::from(m).unwrap();
        let d = -am * (am + b) * x / ((aj + one) * aj);
        (num_next, den_next) = conv.next(d);
        approx.record(num_next, den_next);

        // Even coefficient d_{2m}.
        conv.shift(num_next, den_next);
        m += 1;
        let fm = T::from(m).unwrap();
        aj = a + fm + fm;
        let d = fm * (b - fm) * x / ((aj - one) * aj);
        (num_next, den_next) = conv.next(d);
        approx.record(num_next, den_next);
    }

    let ratio = num_next / den_next;
    if !(ratio.is_finite() && ratio > zero) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            x = ?x,
            a = ?a,
            b = ?b,
            iterations,
            "incomplete beta continued fraction produced a non-finite ratio"
        );
        return Err(SpecialError::ConvergenceFailure);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(iterations, "incomplete beta continued fraction converged");

    let ln_value = a * x.ln() + b * (-x).ln_1p() + ratio.ln() - a.ln() - ln_beta_work(a, b, gamma);
    Ok(ln_value.exp())
}
