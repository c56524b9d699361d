//! Core traits for effect size conversion

use crate::{Conversion, ConversionInput};
use esc_core::Result;

/// A conversion from one effect size metric to another
///
/// Implementors hold only read-only configuration, so one converter can be
/// shared across threads and applied to many studies.
pub trait EffectSizeConverter: Sync {
    /// Convert a single study
    fn convert(&self, input: &ConversionInput) -> Result<Conversion>;

    /// Convert many studies, preserving input order
    ///
    /// Each study is independent; with the `parallel` feature the work is
    /// spread over the rayon thread pool.
    fn convert_batch(&self, inputs: &[ConversionInput]) -> Vec<Result<Conversion>> {
        #[cfg(feature = "parallel")]
        let results = {
            use rayon::prelude::*;
            inputs.par_iter().map(|input| self.convert(input)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results = inputs.iter().map(|input| self.convert(input)).collect();

        results
    }
}
