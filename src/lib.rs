//! Effect size conversion toolkit for meta-analysis
//!
//! Facade over the workspace crates:
//!
//! - [`esc_core`]: shared error type and numeric bounds
//! - [`esc_confidence`]: confidence levels and normal-theory bounds
//! - [`esc_convert`]: odds ratio and d conversions with their notices
//!
//! The most common entry points are re-exported at the top level.
//!
//! ```rust
//! use esc::{convert_or2d, ConversionInput, TargetMetric};
//!
//! let input = ConversionInput::new(1.8).with_se(0.3).with_total_n(120.0);
//! let g = convert_or2d(&input, TargetMetric::G).unwrap();
//! assert!(!g.has_notices());
//! ```

pub use esc_confidence;
pub use esc_convert;
pub use esc_core;

pub use esc_confidence::{ConfidenceInterval, ConfidenceLevel};
pub use esc_convert::{
    convert_d2logit, convert_d2or, convert_or2d, Conversion, ConversionInput, EffectMeasure,
    EffectSizeConverter, EffectSizeResult, LogitMetric, Notice, OddsRatioConverter,
    TargetMetric,
};
pub use esc_core::{Error, Result};
