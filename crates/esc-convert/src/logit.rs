//! Cohen's d to log odds and odds ratio conversion
//!
//! The inverse of the odds ratio conversion: `logit = d · π/√3` with
//! `var_logit = var_d · π²/3`, or with Cox's constant 1.65. On the odds ratio
//! scale the estimate and interval are exponentiated while the variance and
//! weight stay on the log-odds scale, where pooling happens.

use crate::input::{validate, Validation};
use crate::odds_ratio::{logistic_link, logistic_variance, COX_LINK};
use crate::{
    Conversion, ConversionConfig, ConversionInput, EffectMeasure, EffectSizeConverter,
    EffectSizeResult, LogitMetric,
};
use esc_confidence::ConfidenceLevel;
use esc_core::{Error, Result};
use tracing::{debug, instrument};

/// Converts Cohen's d into log odds or odds ratios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DToLogitConverter {
    metric: LogitMetric,
    /// Report on the odds ratio scale instead of log odds
    odds_ratio_scale: bool,
    config: ConversionConfig,
}

impl DToLogitConverter {
    /// Converter producing log odds
    pub fn logit(metric: LogitMetric) -> Self {
        Self {
            metric,
            odds_ratio_scale: false,
            config: ConversionConfig::default(),
        }
    }

    /// Converter producing odds ratios
    pub fn odds_ratio(metric: LogitMetric) -> Self {
        Self {
            odds_ratio_scale: true,
            ..Self::logit(metric)
        }
    }

    /// Use a different confidence level for the intervals
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Result<Self> {
        self.config = ConversionConfig::new(level)?;
        Ok(self)
    }

    fn measure(&self) -> EffectMeasure {
        match (self.metric, self.odds_ratio_scale) {
            (LogitMetric::Logit, false) => EffectMeasure::Logit,
            (LogitMetric::CoxLogit, false) => EffectMeasure::CoxLogit,
            (LogitMetric::Logit, true) => EffectMeasure::OddsRatio,
            (LogitMetric::CoxLogit, true) => EffectMeasure::CoxOddsRatio,
        }
    }

    fn default_info(&self) -> &'static str {
        match (self.metric, self.odds_ratio_scale) {
            (LogitMetric::Logit, false) => "effect size d to effect size logits",
            (LogitMetric::CoxLogit, false) => "effect size d to effect size Cox logits",
            (LogitMetric::Logit, true) => "effect size d to effect size OR",
            (LogitMetric::CoxLogit, true) => "effect size d to effect size Cox OR",
        }
    }
}

impl EffectSizeConverter for DToLogitConverter {
    #[instrument(skip_all, fields(metric = ?self.metric, odds_ratio = self.odds_ratio_scale))]
    fn convert(&self, input: &ConversionInput) -> Result<Conversion> {
        let validated = match validate(input, self.default_info())? {
            Validation::Ready(validated) => validated,
            Validation::Missing(notice) => {
                return Ok(Conversion::new(
                    EffectSizeResult::missing(self.measure()),
                    vec![notice],
                ));
            }
        };

        let d = input.value;
        if !d.is_finite() {
            return Err(Error::non_finite("effect size d"));
        }

        let (logit, variance) = match self.metric {
            LogitMetric::Logit => (d * logistic_link(), validated.variance * logistic_variance()),
            LogitMetric::CoxLogit => (d * COX_LINK, validated.variance * COX_LINK * COX_LINK),
        };
        debug!("d {} -> log odds {:.6}, var {:.6}", d, logit, variance);

        let mut builder = EffectSizeResult::builder(logit, variance, self.measure())
            .total_n(validated.total_n)
            .info(validated.info)
            .study(validated.study)
            .bounds(self.config.bounds());
        if self.odds_ratio_scale {
            builder = builder.back_transform(f64::exp);
        }

        Ok(Conversion::new(builder.build(), Vec::new()))
    }
}
