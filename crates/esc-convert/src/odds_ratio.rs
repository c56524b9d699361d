//! Odds ratio to standardized effect size conversion
//!
//! The log odds ratio is rescaled onto the standardized mean difference scale
//! by a logistic link constant, then optionally refined into Hedges' g,
//! Cohen's f or eta-squared:
//!
//! - d, g, f, eta: `d = ln(OR) / (π/√3)`, `var_d = var_logOR / (π²/3)`
//! - Cox's d: `d = ln(OR) / 1.65`, `var_d = var_logOR / 1.65²`
//!
//! Only the estimate passes through the g/f/eta adapters; the variance,
//! interval and weight are always derived from the d-scale variance.

use crate::input::{validate, Validation};
use crate::{
    cohens_f, eta_squared, hedges_g, Conversion, ConversionConfig, ConversionInput,
    EffectMeasure, EffectSizeConverter, EffectSizeResult, Notice, TargetMetric,
};
use esc_confidence::ConfidenceLevel;
use esc_core::{Error, Result};
use std::f64::consts::PI;
use tracing::{debug, instrument};

/// Cox's empirically calibrated logistic link constant
pub const COX_LINK: f64 = 1.65;

/// Logistic-to-normal link constant `π/√3`
pub fn logistic_link() -> f64 {
    PI / 3f64.sqrt()
}

/// Variance of the standard logistic distribution, `π²/3`
pub fn logistic_variance() -> f64 {
    PI * PI / 3.0
}

/// Converts odds ratios into one of the [`TargetMetric`]s
///
/// ```rust
/// use esc_convert::{ConversionInput, EffectSizeConverter, OddsRatioConverter, TargetMetric};
///
/// let converter = OddsRatioConverter::new(TargetMetric::D);
/// let input = ConversionInput::new(3.56).with_se(0.91);
/// let result = converter.convert(&input).unwrap().into_result();
/// assert!((result.es - 0.7001).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OddsRatioConverter {
    metric: TargetMetric,
    config: ConversionConfig,
}

impl OddsRatioConverter {
    /// Create a converter with 95% intervals
    pub fn new(metric: TargetMetric) -> Self {
        Self {
            metric,
            config: ConversionConfig::default(),
        }
    }

    /// Use a different confidence level for the intervals
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Result<Self> {
        self.config = ConversionConfig::new(level)?;
        Ok(self)
    }

    /// Use an existing configuration
    pub fn with_config(mut self, config: ConversionConfig) -> Self {
        self.config = config;
        self
    }

    /// Target metric of this converter
    pub fn metric(&self) -> TargetMetric {
        self.metric
    }

    /// Log odds ratio and its variance on the d scale
    fn d_scale(self, odds_ratio: f64, variance: f64) -> Result<(f64, f64)> {
        if !(odds_ratio.is_finite() && odds_ratio > 0.0) {
            return Err(Error::invalid_odds_ratio(odds_ratio));
        }
        let log_or = odds_ratio.ln();

        let scaled = match self.metric {
            TargetMetric::CoxD => (log_or / COX_LINK, variance / (COX_LINK * COX_LINK)),
            TargetMetric::D | TargetMetric::G | TargetMetric::F | TargetMetric::Eta => {
                (log_or / logistic_link(), variance / logistic_variance())
            }
        };
        Ok(scaled)
    }
}

impl EffectSizeConverter for OddsRatioConverter {
    #[instrument(skip_all, fields(metric = ?self.metric))]
    fn convert(&self, input: &ConversionInput) -> Result<Conversion> {
        let validated = match validate(input, self.metric.default_info())? {
            Validation::Ready(validated) => validated,
            Validation::Missing(notice) => {
                return Ok(Conversion::new(
                    EffectSizeResult::missing(self.metric.into()),
                    vec![notice],
                ));
            }
        };

        let (d, variance) = self.d_scale(input.value, validated.variance)?;
        debug!("OR {} -> base d {:.6}, var {:.6}", input.value, d, variance);

        let mut notices = Vec::new();
        let (es, measure) = match self.metric {
            TargetMetric::D => (d, EffectMeasure::D),
            TargetMetric::CoxD => (d, EffectMeasure::CoxD),
            TargetMetric::G => match validated.total_n {
                Some(n) => (hedges_g(d, n)?, EffectMeasure::G),
                None => {
                    notices.push(Notice::MissingTotalN.emit());
                    (d, EffectMeasure::D)
                }
            },
            TargetMetric::F => (cohens_f(d), EffectMeasure::F),
            TargetMetric::Eta => (eta_squared(d), EffectMeasure::Eta),
        };

        let result = EffectSizeResult::builder(es, variance, measure)
            .total_n(validated.total_n)
            .info(validated.info)
            .study(validated.study)
            .bounds(self.config.bounds())
            .build();

        Ok(Conversion::new(result, notices))
    }
}
