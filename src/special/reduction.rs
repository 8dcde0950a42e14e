//! Shape reduction for the incomplete beta function.
//!
//! The continued fraction only behaves for a > 1, b > 1. Every other shape is
//! expressed through recurrences of the incomplete beta integral that raise
//! whichever parameter is below one, until each term lands in the continued
//! fraction region or on a closed form at a = 1 or b = 1.
//!
//! Both the regularized function I_x(a,b) and the unregularized integral
//! B_x(a,b) are linear in their reduced terms, so a reduction is a weighted
//! sum `value + Σ wᵢ·F(aᵢ, bᵢ)`. [`evaluate`] walks that sum with a fixed-size
//! worklist instead of recursion.

use core::cmp::Ordering::{Equal, Greater, Less};

use crate::traits::WorkingFloat;
use super::beta_fn::{beta_work, ln_beta_work};
use super::continued_fraction::continued_fraction;
use super::gamma_fn::GammaProvider;
use super::{BetaSettings, SpecialError, MAX_REDUCTION_DEPTH};

/// Worklist slots. A depth-first walk of a binary reduction tree of depth d
/// holds at most d + 1 pending terms.
const WORKLIST_CAPACITY: usize = 2 * MAX_REDUCTION_DEPTH + 2;

/// Mutually exclusive (a, b, x) regions, one formula each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Region {
    /// a > 1, b > 1, x ≤ (a−1)/(a+b−2): continued fraction at x.
    Interior,
    /// a > 1, b > 1, x above the mode: continued fraction at 1−x with a, b swapped.
    Reflected,
    /// a < 1, b < 1: raise both.
    BothBelowOne,
    /// a = 1: closed form.
    UnitA,
    /// b = 1, a ≠ 1: closed form.
    UnitB,
    /// a < 1, b > 1: raise a.
    SmallA,
    /// a > 1, b < 1: raise b.
    SmallB,
}

impl Region {
    /// Classify a shape pair. NaN shapes are a domain error.
    pub(crate) fn classify<T: WorkingFloat>(x: T, a: T, b: T) -> Result<Self, SpecialError> {
        let one = T::one();
        let (Some(ra), Some(rb)) = (a.partial_cmp(&one), b.partial_cmp(&one)) else {
            return Err(SpecialError::DomainError);
        };
        let region = match (ra, rb) {
            (Greater, Greater) => {
                if x <= (a - one) / (a + b - one - one) {
                    Region::Interior
                } else {
                    Region::Reflected
                }
            }
            (Less, Less) => Region::BothBelowOne,
            (Equal, _) => Region::UnitA,
            (_, Equal) => Region::UnitB,
            (Less, Greater) => Region::SmallA,
            (Greater, Less) => Region::SmallB,
        };
        Ok(region)
    }
}

/// A reduced term F(a, b) entering the sum with `weight`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Child<T> {
    a: T,
    b: T,
    weight: T,
}

/// One reduction step: F(a, b) = value + Σ child.weight · F(child.a, child.b).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Expansion<T> {
    value: T,
    children: [Option<Child<T>>; 2],
}

impl<T: WorkingFloat> Expansion<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            children: [None, None],
        }
    }

    fn reduce(value: T, a: T, b: T, weight: T) -> Self {
        Self {
            value,
            children: [Some(Child { a, b, weight }), None],
        }
    }

    fn split(first: Child<T>, second: Child<T>) -> Self {
        Self {
            value: T::zero(),
            children: [Some(first), Some(second)],
        }
    }
}

/// A family of incomplete beta recurrences.
pub(crate) trait Family<T> {
    /// Expand F(x; a, b) one step for the given region.
    fn expand(&self, region: Region, x: T, a: T, b: T) -> Result<Expansion<T>, SpecialError>;
}

/// Regularized incomplete beta I_x(a, b).
pub(crate) struct Regularized<'a, G> {
    pub(crate) settings: &'a BetaSettings,
    pub(crate) gamma: &'a G,
}

impl<G> Regularized<'_, G> {
    /// x^a (1−x)^b / (s·B(a,b)), in log space.
    fn scaled_kernel<T: WorkingFloat>(&self, x: T, a: T, b: T, s: T) -> T
    where
        G: GammaProvider<T>,
    {
        (a * x.ln() + b * (-x).ln_1p() - s.ln() - ln_beta_work(a, b, self.gamma)).exp()
    }
}

impl<T: WorkingFloat, G: GammaProvider<T>> Family<T> for Regularized<'_, G> {
    fn expand(&self, region: Region, x: T, a: T, b: T) -> Result<Expansion<T>, SpecialError> {
        let one = T::one();
        let expansion = match region {
            Region::Interior => {
                Expansion::leaf(continued_fraction(x, a, b, self.settings, self.gamma)?)
            }
            Region::Reflected => Expansion::leaf(
                one - continued_fraction(one - x, b, a, self.settings, self.gamma)?,
            ),
            Region::BothBelowOne => {
                let ab = a + b;
                Expansion::split(
                    Child { a: a + one, b, weight: a / ab },
                    Child { a, b: b + one, weight: b / ab },
                )
            }
            Region::UnitA => Expansion::leaf(
                one - (b * (-x).ln_1p()).exp() / (b * beta_work(a, b, self.gamma)),
            ),
            Region::UnitB => Expansion::leaf(x.powf(a) / (a * beta_work(a, b, self.gamma))),
            Region::SmallA => Expansion::reduce(self.scaled_kernel(x, a, b, a), a + one, b, one),
            Region::SmallB => Expansion::reduce(-self.scaled_kernel(x, a, b, b), a, b + one, one),
        };
        Ok(expansion)
    }
}

/// Unregularized incomplete beta integral B_x(a, b).
pub(crate) struct Unregularized<'a, G> {
    pub(crate) settings: &'a BetaSettings,
    pub(crate) gamma: &'a G,
}

impl<T: WorkingFloat, G: GammaProvider<T>> Family<T> for Unregularized<'_, G> {
    fn expand(&self, region: Region, x: T, a: T, b: T) -> Result<Expansion<T>, SpecialError> {
        let one = T::one();
        let expansion = match region {
            Region::Interior => {
                let cf = continued_fraction(x, a, b, self.settings, self.gamma)?;
                Expansion::leaf(beta_work(a, b, self.gamma) * cf)
            }
            Region::Reflected => {
                let cf = continued_fraction(one - x, b, a, self.settings, self.gamma)?;
                Expansion::leaf(beta_work(a, b, self.gamma) * (one - cf))
            }
            Region::BothBelowOne => Expansion::split(
                Child { a: a + one, b, weight: one },
                Child { a, b: b + one, weight: one },
            ),
            // (1 − (1−x)^b) / b
            Region::UnitA => Expansion::leaf(-(b * (-x).ln_1p()).exp_m1() / b),
            Region::UnitB => Expansion::leaf(x.powf(a) / a),
            Region::SmallA => {
                let kernel = x.powf(a) * (one - x).powf(b);
                Expansion::reduce(kernel / a, a + one, b, (a + b) / a)
            }
            Region::SmallB => {
                let kernel = x.powf(a) * (one - x).powf(b);
                Expansion::reduce(-kernel / b, a, b + one, (a + b) / b)
            }
        };
        Ok(expansion)
    }
}

#[derive(Debug, Clone, Copy)]
struct Term<T> {
    a: T,
    b: T,
    weight: T,
    depth: usize,
}

/// Fixed-capacity stack of pending terms.
struct Worklist<T> {
    slots: [Option<Term<T>>; WORKLIST_CAPACITY],
    len: usize,
}

impl<T: Copy> Worklist<T> {
    fn new() -> Self {
        Self {
            slots: [None; WORKLIST_CAPACITY],
            len: 0,
        }
    }

    fn push(&mut self, term: Term<T>) -> Result<(), SpecialError> {
        let slot = self.slots.get_mut(self.len).ok_or(SpecialError::DepthExceeded)?;
        *slot = Some(term);
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Option<Term<T>> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }
}

/// Evaluate F(x; a, b) for a family by iterated expansion.
///
/// # Errors
///
/// [`SpecialError::DepthExceeded`] once a term would be reduced past
/// `settings.max_depth` (clamped to [`MAX_REDUCTION_DEPTH`]); otherwise any
/// error from the family's expansion.
pub(crate) fn evaluate<T: WorkingFloat, F: Family<T>>(
    family: &F,
    x: T,
    a: T,
    b: T,
    settings: &BetaSettings,
) -> Result<T, SpecialError> {
    let max_depth = settings.max_depth.min(MAX_REDUCTION_DEPTH);
    let mut worklist = Worklist::new();
    worklist.push(Term {
        a,
        b,
        weight: T::one(),
        depth: 0,
    })?;

    let mut total = T::zero();
    while let Some(term) = worklist.pop() {
        let region = Region::classify(x, term.a, term.b)?;
        let expansion = family.expand(region, x, term.a, term.b)?;
        total = total + term.weight * expansion.value;

        for child in expansion.children.into_iter().flatten() {
            if term.depth >= max_depth {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    a = ?a,
                    b = ?b,
                    max_depth,
                    "incomplete beta shape reduction exceeded depth limit"
                );
                return Err(SpecialError::DepthExceeded);
            }
            worklist.push(Term {
                a: child.a,
                b: child.b,
                weight: term.weight * child.weight,
                depth: term.depth + 1,
            })?;
        }
    }
    Ok(total)
}
