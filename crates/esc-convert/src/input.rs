//! Conversion input and its validation
//!
//! Validation resolves the uncertainty representation into a single variance
//! before any metric-specific logic runs. A standard error wins over a
//! separately supplied variance; NaN counts as "not supplied" everywhere.

use crate::Notice;
use esc_core::{present, Error, Result};

/// One study's input to a conversion
///
/// `value` is the effect size being converted: the odds ratio for
/// [`OddsRatioConverter`](crate::OddsRatioConverter), Cohen's d for
/// [`DToLogitConverter`](crate::DToLogitConverter). The standard error and
/// variance refer to the converter's input scale (log-odds for an odds
/// ratio).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionInput {
    /// Effect size to convert
    pub value: f64,
    /// Standard error on the input scale
    pub se: Option<f64>,
    /// Variance on the input scale
    pub v: Option<f64>,
    /// Total sample size; NaN is treated as absent
    pub total_n: Option<f64>,
    /// Free-text description; generated from the target metric when absent
    pub info: Option<String>,
    /// Study identifier
    pub study: Option<String>,
}

impl ConversionInput {
    /// Create an input with no uncertainty attached
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Attach a standard error
    pub fn with_se(mut self, se: f64) -> Self {
        self.se = Some(se);
        self
    }

    /// Attach a variance
    pub fn with_variance(mut self, v: f64) -> Self {
        self.v = Some(v);
        self
    }

    /// Attach the total sample size
    pub fn with_total_n(mut self, total_n: f64) -> Self {
        self.total_n = Some(total_n);
        self
    }

    /// Attach a description
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Attach a study identifier
    pub fn with_study(mut self, study: impl Into<String>) -> Self {
        self.study = Some(study.into());
        self
    }
}

/// Resolve the variance from a standard error and/or a variance
///
/// A present standard error takes precedence and yields `se²`. Returns
/// [`Error::MissingUncertainty`] when neither is present.
pub fn resolve_variance(se: Option<f64>, v: Option<f64>) -> Result<f64> {
    let variance = match (present(se), present(v)) {
        (Some(se), _) => {
            if se < 0.0 || !se.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "Standard error {se} must be non-negative and finite"
                )));
            }
            se * se
        }
        (None, Some(v)) => v,
        (None, None) => return Err(Error::MissingUncertainty),
    };

    if variance < 0.0 || !variance.is_finite() {
        return Err(Error::invalid_variance(variance));
    }
    Ok(variance)
}

/// Normalize the total sample size
///
/// Absent or NaN becomes `None`; anything else must be a non-negative whole
/// number.
pub fn normalize_total_n(total_n: Option<f64>) -> Result<Option<usize>> {
    match present(total_n) {
        None => Ok(None),
        Some(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 => Ok(Some(n as usize)),
        Some(n) => Err(Error::invalid_sample_size(n)),
    }
}

/// Input after validation, ready for a metric transform
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Validated {
    pub variance: f64,
    pub total_n: Option<usize>,
    pub info: String,
    pub study: Option<String>,
}

/// Outcome of validating an input
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Validation {
    /// Proceed with the transform
    Ready(Validated),
    /// Short-circuit to the missing sentinel
    Missing(Notice),
}

/// Validate an input, generating `default_info` when the caller gave none
///
/// The missing-uncertainty check runs first, so an input without se/v
/// short-circuits before its sample size is inspected.
pub(crate) fn validate(input: &ConversionInput, default_info: &str) -> Result<Validation> {
    let variance = match resolve_variance(input.se, input.v) {
        Ok(variance) => variance,
        Err(Error::MissingUncertainty) => {
            return Ok(Validation::Missing(Notice::MissingUncertainty.emit()))
        }
        Err(e) => return Err(e),
    };

    Ok(Validation::Ready(Validated {
        variance,
        total_n: normalize_total_n(input.total_n)?,
        info: input
            .info
            .clone()
            .unwrap_or_else(|| default_info.to_string()),
        study: input.study.clone(),
    }))
}
