//! Variance explained scale effect sizes derived from Cohen's d

use esc_core::Scalar;

/// Cohen's f from Cohen's d
///
/// For two groups of equal size f = d / 2.
pub fn cohens_f<T: Scalar>(d: T) -> T {
    d / T::constant(2.0)
}

/// Eta-squared (η²) from Cohen's d
///
/// η² = d² / (d² + 4)
///
/// Eta-squared represents the proportion of total variance explained by
/// group membership and lies in [0, 1).
pub fn eta_squared<T: Scalar>(d: T) -> T {
    let d_squared = d * d;
    d_squared / (d_squared + T::constant(4.0))
}
