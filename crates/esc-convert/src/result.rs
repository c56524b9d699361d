//! Conversion results and their assembly
//!
//! [`EffectSizeResult`] has the same shape whichever conversion produced it,
//! so pooling code can consume results without knowing their origin.

use crate::{EffectMeasure, Notice};
use esc_confidence::NormalBounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single study's effect size with its uncertainty and pooling weight
///
/// Missing numeric values are NaN (see [`EffectSizeResult::missing`]).
/// JSON has no NaN or infinity, so those serialize as `null`; reading a
/// `null` back gives NaN, except for a `null` weight, which is recomputed as
/// `1/var` so a zero variance keeps `w = +∞`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ResultRecord")]
pub struct EffectSizeResult {
    /// Point estimate
    pub es: f64,
    /// Standard error, `sqrt(var)`
    pub se: f64,
    /// Sampling variance
    pub var: f64,
    /// Lower confidence bound
    #[serde(rename = "ci.lo")]
    pub ci_lo: f64,
    /// Upper confidence bound
    #[serde(rename = "ci.hi")]
    pub ci_hi: f64,
    /// Inverse-variance weight, `1/var`
    pub w: f64,
    /// Total sample size
    pub totaln: Option<usize>,
    /// Which metric the estimate is on
    pub measure: EffectMeasure,
    /// Description of the conversion
    pub info: Option<String>,
    /// Study identifier
    pub study: Option<String>,
}

/// Deserialized form of [`EffectSizeResult`] that accepts `null` numbers
#[derive(Deserialize)]
struct ResultRecord {
    es: Option<f64>,
    se: Option<f64>,
    var: Option<f64>,
    #[serde(rename = "ci.lo")]
    ci_lo: Option<f64>,
    #[serde(rename = "ci.hi")]
    ci_hi: Option<f64>,
    w: Option<f64>,
    totaln: Option<usize>,
    measure: EffectMeasure,
    info: Option<String>,
    study: Option<String>,
}

impl From<ResultRecord> for EffectSizeResult {
    fn from(record: ResultRecord) -> Self {
        let or_nan = |value: Option<f64>| value.unwrap_or(f64::NAN);
        let var = or_nan(record.var);
        Self {
            es: or_nan(record.es),
            se: or_nan(record.se),
            var,
            ci_lo: or_nan(record.ci_lo),
            ci_hi: or_nan(record.ci_hi),
            w: record.w.unwrap_or(1.0 / var),
            totaln: record.totaln,
            measure: record.measure,
            info: record.info,
            study: record.study,
        }
    }
}

impl EffectSizeResult {
    /// Start assembling a result from an estimate and its variance
    pub fn builder(es: f64, var: f64, measure: EffectMeasure) -> ResultBuilder {
        ResultBuilder {
            es,
            var,
            measure,
            totaln: None,
            info: None,
            study: None,
            bounds: NormalBounds::default(),
            back_transform: None,
        }
    }

    /// The sentinel for a conversion that had no usable uncertainty
    ///
    /// All numeric fields are NaN; sample size, info and study are absent.
    pub fn missing(measure: EffectMeasure) -> Self {
        Self::builder(f64::NAN, f64::NAN, measure).build()
    }

    /// Whether this is the missing sentinel
    pub fn is_missing(&self) -> bool {
        self.es.is_nan() && self.var.is_nan()
    }
}

impl fmt::Display for EffectSizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.4} (se {:.4}, CI [{:.4}, {:.4}], w {:.4})",
            self.measure, self.es, self.se, self.ci_lo, self.ci_hi, self.w
        )?;
        if let Some(study) = &self.study {
            write!(f, " [{}]", study)?;
        }
        Ok(())
    }
}

/// Assembles an [`EffectSizeResult`]
///
/// Pure assembly: `se`, the interval and the weight are derived from the
/// estimate and variance without further validation.
#[derive(Debug, Clone)]
pub struct ResultBuilder {
    es: f64,
    var: f64,
    measure: EffectMeasure,
    totaln: Option<usize>,
    info: Option<String>,
    study: Option<String>,
    bounds: NormalBounds,
    back_transform: Option<fn(f64) -> f64>,
}

impl ResultBuilder {
    /// Total sample size from two group sizes; absent if either is
    pub fn group_sizes(mut self, n1: Option<usize>, n2: Option<usize>) -> Self {
        self.totaln = n1.zip(n2).map(|(a, b)| a + b);
        self
    }

    /// Total sample size
    pub fn total_n(mut self, totaln: Option<usize>) -> Self {
        self.totaln = totaln;
        self
    }

    /// Description of the conversion
    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Study identifier
    pub fn study(mut self, study: Option<String>) -> Self {
        self.study = study;
        self
    }

    /// Bounds used for the interval (95% normal by default)
    pub fn bounds(mut self, bounds: NormalBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Map the estimate and interval through a monotone transform after the
    /// interval has been computed on the variance's scale
    ///
    /// `se`, `var` and `w` stay on the original scale.
    pub fn back_transform(mut self, f: fn(f64) -> f64) -> Self {
        self.back_transform = Some(f);
        self
    }

    /// Build the result
    pub fn build(self) -> EffectSizeResult {
        let mut ci = self.bounds.interval(self.es, self.var);
        if let Some(f) = self.back_transform {
            ci = ci.map_monotonic(f);
        }

        EffectSizeResult {
            es: ci.estimate,
            se: self.var.sqrt(),
            var: self.var,
            ci_lo: ci.lower,
            ci_hi: ci.upper,
            w: 1.0 / self.var,
            totaln: self.totaln,
            measure: self.measure,
            info: self.info,
            study: self.study,
        }
    }
}

/// A result together with the notices raised while producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The assembled result
    pub result: EffectSizeResult,
    /// Non-fatal diagnostics, in the order they were raised
    pub notices: Vec<Notice>,
}

impl Conversion {
    pub(crate) fn new(result: EffectSizeResult, notices: Vec<Notice>) -> Self {
        Self { result, notices }
    }

    /// Whether any notice was raised
    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Whether a specific notice was raised
    pub fn raised(&self, notice: Notice) -> bool {
        self.notices.contains(&notice)
    }

    /// Drop the notices
    pub fn into_result(self) -> EffectSizeResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_builder_derives_fields() {
        let r = EffectSizeResult::builder(0.5, 0.04, EffectMeasure::D)
            .total_n(Some(80))
            .info("test")
            .study(Some("A".to_string()))
            .build();

        assert_eq!(r.es, 0.5);
        assert_abs_diff_eq!(r.se, 0.2, epsilon = 1e-15);
        assert_eq!(r.var, 0.04);
        assert_abs_diff_eq!(r.w, 25.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.ci_lo, 0.5 - 1.959964 * 0.2, epsilon = 1e-6);
        assert_abs_diff_eq!(r.ci_hi, 0.5 + 1.959964 * 0.2, epsilon = 1e-6);
        assert_eq!(r.totaln, Some(80));
        assert_eq!(r.info.as_deref(), Some("test"));
        assert_eq!(r.study.as_deref(), Some("A"));
    }

    #[test]
    fn test_group_sizes() {
        let both = EffectSizeResult::builder(0.1, 0.1, EffectMeasure::D)
            .group_sizes(Some(12), Some(15))
            .build();
        assert_eq!(both.totaln, Some(27));

        let one = EffectSizeResult::builder(0.1, 0.1, EffectMeasure::D)
            .group_sizes(Some(12), None)
            .build();
        assert_eq!(one.totaln, None);
    }

    #[test]
    fn test_missing_sentinel() {
        let r = EffectSizeResult::missing(EffectMeasure::G);
        assert!(r.is_missing());
        for value in [r.es, r.se, r.var, r.ci_lo, r.ci_hi, r.w] {
            assert!(value.is_nan());
        }
        assert_eq!(r.totaln, None);
        assert_eq!(r.info, None);
        assert_eq!(r.study, None);
        assert_eq!(r.measure, EffectMeasure::G);
    }

    #[test]
    fn test_zero_variance_weight_is_infinite() {
        let r = EffectSizeResult::builder(0.3, 0.0, EffectMeasure::D).build();
        assert_eq!(r.w, f64::INFINITY);
        assert_eq!(r.ci_lo, r.ci_hi);
    }

    #[test]
    fn test_back_transform_keeps_variance_scale() {
        let r = EffectSizeResult::builder(0.0, 0.25, EffectMeasure::OddsRatio)
            .back_transform(f64::exp)
            .build();
        assert_eq!(r.es, 1.0);
        assert_eq!(r.var, 0.25);
        assert_eq!(r.se, 0.5);
        assert_abs_diff_eq!(r.ci_lo * r.ci_hi, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_record_nulls_become_nan() {
        let record = ResultRecord {
            es: None,
            se: None,
            var: None,
            ci_lo: None,
            ci_hi: None,
            w: None,
            totaln: None,
            measure: EffectMeasure::F,
            info: None,
            study: None,
        };
        let r = EffectSizeResult::from(record);
        assert!(r.is_missing());
        assert!(r.w.is_nan());
        assert_eq!(r.measure, EffectMeasure::F);
    }

    #[test]
    fn test_record_null_weight_recomputed() {
        let record = ResultRecord {
            es: Some(0.3),
            se: Some(0.0),
            var: Some(0.0),
            ci_lo: Some(0.3),
            ci_hi: Some(0.3),
            w: None,
            totaln: None,
            measure: EffectMeasure::D,
            info: None,
            study: None,
        };
        assert_eq!(EffectSizeResult::from(record).w, f64::INFINITY);
    }

    #[test]
    fn test_display() {
        let r = EffectSizeResult::builder(0.6, 0.01, EffectMeasure::CoxD)
            .study(Some("Jones 2019".to_string()))
            .build();
        let display = r.to_string();
        assert!(display.starts_with("cox d: 0.6000"));
        assert!(display.contains("[Jones 2019]"));
    }

    #[test]
    fn test_conversion_notices() {
        let c = Conversion::new(
            EffectSizeResult::missing(EffectMeasure::D),
            vec![Notice::MissingUncertainty],
        );
        assert!(c.has_notices());
        assert!(c.raised(Notice::MissingUncertainty));
        assert!(!c.raised(Notice::MissingTotalN));
        assert!(c.into_result().is_missing());
    }
}
