//! Normal-theory confidence bounds from an estimate and its variance
//!
//! Effect sizes produced by the conversions are asymptotically normal with a
//! known sampling variance, so their interval is `es ± z · sqrt(var)` with
//! `z` the two-sided standard normal critical value.

use crate::{ConfidenceInterval, ConfidenceLevel};
use esc_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

/// Two-sided critical value of the standard normal distribution
pub fn critical_value(level: ConfidenceLevel) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    Ok(normal.inverse_cdf(1.0 - level.tail_probability()))
}

/// Normal confidence bound calculator
///
/// The critical value is computed once at construction so bounds for many
/// studies can be produced without re-evaluating the quantile function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalBounds {
    /// Confidence level
    level: ConfidenceLevel,
    /// Cached `z_{1 - alpha/2}`
    critical: f64,
}

impl NormalBounds {
    /// Create a bound calculator for the given confidence level
    pub fn new(level: ConfidenceLevel) -> Result<Self> {
        let critical = critical_value(level)?;
        debug!("Normal critical value for {}: {:.6}", level, critical);
        Ok(Self { level, critical })
    }

    /// Confidence level these bounds are built for
    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Critical value used for the margin
    pub fn critical(&self) -> f64 {
        self.critical
    }

    /// Lower bound `es - z · sqrt(var)`
    ///
    /// A NaN estimate or variance yields NaN, which is how the missing
    /// result carries its absent interval.
    pub fn lower(&self, es: f64, var: f64) -> f64 {
        es - self.critical * var.sqrt()
    }

    /// Upper bound `es + z · sqrt(var)`
    pub fn upper(&self, es: f64, var: f64) -> f64 {
        es + self.critical * var.sqrt()
    }

    /// Full interval around `es`
    pub fn interval(&self, es: f64, var: f64) -> ConfidenceInterval {
        ConfidenceInterval::new(
            self.lower(es, var),
            self.upper(es, var),
            es,
            self.level.value(),
        )
    }
}

impl Default for NormalBounds {
    fn default() -> Self {
        // z_{0.975}
        Self {
            level: ConfidenceLevel::NINETY_FIVE,
            critical: 1.959_963_984_540_054,
        }
    }
}

/// Lower 95% bound of an effect size with sampling variance `var`
pub fn lower_d(es: f64, var: f64) -> f64 {
    NormalBounds::default().lower(es, var)
}

/// Upper 95% bound of an effect size with sampling variance `var`
pub fn upper_d(es: f64, var: f64) -> f64 {
    NormalBounds::default().upper(es, var)
}
