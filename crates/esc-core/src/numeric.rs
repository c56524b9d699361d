//! Scalar bound shared by the effect size transforms
//!
//! The closed-form adapters (Hedges' g, Cohen's f, eta-squared) are plain
//! arithmetic and work for any IEEE float, so they are written against
//! [`Scalar`] rather than a concrete `f64`.

use num_traits::{Float, NumCast};
use std::fmt::Debug;

/// Floating point type usable by the effect size transforms
pub trait Scalar: Float + Debug + Send + Sync + 'static {
    /// Convert an `f64` constant into this type
    ///
    /// Falls back to NaN when the value has no representation in `Self`.
    #[inline]
    fn constant(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }
}

impl Scalar for f64 {}

impl Scalar for f32 {}

/// Treat NaN as an absent value
///
/// Inputs arriving from tabular sources encode "not available" as NaN; this
/// collapses that encoding into `None`.
#[inline]
pub fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}
