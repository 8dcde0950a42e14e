use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for numeric element types.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point types (`f32`, `f64`).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

// ---------------------------------------------------------------------------
// Working-precision constants
// ---------------------------------------------------------------------------

/// Largest x for which Γ(x) is finite in `f64`.
pub const F64_GAMMA_MAX_ARG: f64 = 171.624_376_956_302_7;

/// ln(f64::MAX).
pub const LN_F64_MAX: f64 = 709.782_712_893_384;

/// Floating-point type in which beta evaluations are carried out.
///
/// The constants are read-only for the lifetime of the process and are
/// the only thresholds the evaluation engine consults.
pub trait WorkingFloat: FloatScalar {
    /// Largest argument for which Γ does not overflow.
    const GAMMA_MAX_ARG: Self;
    /// Natural log of the largest finite value. Log-space results above
    /// this saturate instead of overflowing.
    const LN_MAX: Self;
    /// Relative convergence tolerance for the continued fraction (10 × ε).
    const CF_EPS: Self;
}

impl WorkingFloat for f64 {
    const GAMMA_MAX_ARG: f64 = F64_GAMMA_MAX_ARG;
    const LN_MAX: f64 = LN_F64_MAX;
    const CF_EPS: f64 = 10.0 * f64::EPSILON;
}

/// Public numeric type accepted by the beta entry points.
///
/// Inputs are widened to [`Precision::Work`] before evaluation and the
/// result is narrowed back. Narrowing saturates: anything beyond the public
/// type's range (including ±∞) becomes `±MAX`. NaN passes through.
///
/// `f32` is evaluated in `f64`. `f64` is evaluated in `f64`, there being no
/// wider hardware float on stable Rust, but still goes through the same
/// saturating narrow.
pub trait Precision: FloatScalar {
    /// Internal evaluation type.
    type Work: WorkingFloat;

    /// Convert a public value into the working type. Exact.
    fn widen(self) -> Self::Work;

    /// Convert a working value back, clamping to the finite range.
    fn narrow(w: Self::Work) -> Self;
}

impl Precision for f32 {
    type Work = f64;

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(w: f64) -> f32 {
        let max = f64::from(f32::MAX);
        if w > max {
            f32::MAX
        } else if w < -max {
            -f32::MAX
        } else {
            w as f32
        }
    }
}

impl Precision for f64 {
    type Work = f64;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(w: f64) -> f64 {
        if w == f64::INFINITY {
            f64::MAX
        } else if w == f64::NEG_INFINITY {
            -f64::MAX
        } else {
            w
        }
    }
}
