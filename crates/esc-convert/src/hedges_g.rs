//! Hedges' g effect size
//!
//! Hedges' g is a bias-corrected version of Cohen's d that provides a less biased
//! estimate of effect size, especially for small samples. It applies a correction
//! factor to account for the upward bias in Cohen's d.

use esc_core::{Error, Result, Scalar};

/// Smallest total sample size for which the correction is defined
pub const MIN_TOTAL_N: usize = 3;

/// Calculate the bias correction factor J
///
/// Hedges' approximation:
/// J = 1 - 3/(4N - 9)
///
/// where N is the total sample size. The denominator is non-positive for
/// N < 3, so those sizes are rejected.
pub fn bias_correction_factor<T: Scalar>(total_n: usize) -> Result<T> {
    if total_n < MIN_TOTAL_N {
        return Err(Error::InsufficientData {
            expected: MIN_TOTAL_N,
            actual: total_n,
        });
    }
    let n = T::constant(total_n as f64);
    Ok(T::one() - T::constant(3.0) / (T::constant(4.0) * n - T::constant(9.0)))
}

/// Hedges' g from Cohen's d and the total sample size
///
/// g = d × J
///
/// For large samples, g ≈ d, but for small samples |g| < |d|.
pub fn hedges_g<T: Scalar>(d: T, total_n: usize) -> Result<T> {
    Ok(d * bias_correction_factor::<T>(total_n)?)
}
