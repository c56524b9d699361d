//! Effect size conversion for meta-analysis
//!
//! This crate converts a single study's odds ratio, with its standard error or
//! variance on the log-odds scale, into a standardized effect size together
//! with the variance, confidence interval and inverse-variance weight needed
//! for pooling.
//!
//! # Supported Conversions
//!
//! ## Odds ratio to:
//! - **Cohen's d**: `ln(OR) / (π/√3)`
//! - **Cox's d**: `ln(OR) / 1.65`
//! - **Hedges' g**: bias-corrected d (needs the total sample size)
//! - **Cohen's f**: `d / 2`
//! - **Eta-squared (η²)**: `d² / (d² + 4)`
//!
//! ## Cohen's d to:
//! - **Log odds** and **odds ratios**, with the logistic or Cox link
//!
//! Conditions that still allow a meaningful result (no uncertainty given, no
//! sample size for Hedges' g) are reported as [`Notice`]s next to the result.
//! Input that has no numeric meaning, such as a non-positive odds ratio, is an
//! error.
//!
//! # Examples
//!
//! ```rust
//! use esc_convert::{convert_or2d, ConversionInput, Notice, TargetMetric};
//!
//! let input = ConversionInput::new(3.56).with_se(0.91).with_study("Smith 2020");
//! let d = convert_or2d(&input, TargetMetric::D).unwrap();
//! println!("{}", d.result);
//!
//! // Hedges' g without a sample size falls back to d
//! let g = convert_or2d(&input, TargetMetric::G).unwrap();
//! assert!(g.raised(Notice::MissingTotalN));
//! assert_eq!(g.result.es, d.result.es);
//! ```

mod config;
mod hedges_g;
mod input;
mod logit;
mod notice;
mod odds_ratio;
mod result;
mod traits;
mod types;
mod variance_explained;

// Re-exports
pub use config::ConversionConfig;
pub use hedges_g::{bias_correction_factor, hedges_g, MIN_TOTAL_N};
pub use input::{normalize_total_n, resolve_variance, ConversionInput};
pub use logit::DToLogitConverter;
pub use notice::Notice;
pub use odds_ratio::{logistic_link, logistic_variance, OddsRatioConverter, COX_LINK};
pub use result::{Conversion, EffectSizeResult, ResultBuilder};
pub use traits::EffectSizeConverter;
pub use types::{EffectMeasure, LogitMetric, TargetMetric};
pub use variance_explained::{cohens_f, eta_squared};

pub use esc_core::{Error, Result};

// Convenience constructors
pub fn convert_or2d(input: &ConversionInput, metric: TargetMetric) -> Result<Conversion> {
    OddsRatioConverter::new(metric).convert(input)
}

pub fn convert_d2logit(input: &ConversionInput, metric: LogitMetric) -> Result<Conversion> {
    DToLogitConverter::logit(metric).convert(input)
}

pub fn convert_d2or(input: &ConversionInput, metric: LogitMetric) -> Result<Conversion> {
    DToLogitConverter::odds_ratio(metric).convert(input)
}
