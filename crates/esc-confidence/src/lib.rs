//! Confidence intervals for converted effect sizes
//!
//! Every conversion result carries a two-sided interval built from its point
//! estimate and sampling variance. This crate provides:
//!
//! - **[`ConfidenceLevel`]**: validated level in (0, 1) with common presets
//! - **[`ConfidenceInterval`]**: lower/upper bounds around an estimate
//! - **[`NormalBounds`]**: `es ± z · sqrt(var)` with a cached critical value
//!
//! # Examples
//!
//! ```rust
//! use esc_confidence::{ConfidenceLevel, NormalBounds};
//!
//! let bounds = NormalBounds::new(ConfidenceLevel::NINETY_FIVE).unwrap();
//! let ci = bounds.interval(0.70, 0.25);
//! assert!(ci.lower < 0.70 && 0.70 < ci.upper);
//! println!("{}", ci);
//! ```

mod normal;
mod types;

// Re-exports
pub use normal::{critical_value, lower_d, upper_d, NormalBounds};
pub use types::{ConfidenceInterval, ConfidenceLevel};
