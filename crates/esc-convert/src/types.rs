//! Types naming the effect size metrics a conversion can produce

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target metric of an odds ratio conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetMetric {
    /// Cohen's d via the logistic link `π/√3`
    #[default]
    D,
    /// Cox's d via the link constant 1.65
    CoxD,
    /// Hedges' g, bias-corrected d (needs the total sample size)
    G,
    /// Cohen's f
    F,
    /// Eta-squared
    Eta,
}

impl TargetMetric {
    /// All target metrics, in declaration order
    pub const ALL: [TargetMetric; 5] = [Self::D, Self::CoxD, Self::G, Self::F, Self::Eta];

    /// Description used when the caller supplies none
    pub fn default_info(&self) -> &'static str {
        match self {
            Self::D => "effect size OR to effect size d",
            Self::CoxD => "effect size OR to effect size Cox d",
            Self::G => "effect size OR to effect size Hedges' g",
            Self::F => "effect size OR to effect size Cohen's f",
            Self::Eta => "effect size OR to effect size eta squared",
        }
    }
}

impl From<TargetMetric> for EffectMeasure {
    fn from(metric: TargetMetric) -> Self {
        match metric {
            TargetMetric::D => Self::D,
            TargetMetric::CoxD => Self::CoxD,
            TargetMetric::G => Self::G,
            TargetMetric::F => Self::F,
            TargetMetric::Eta => Self::Eta,
        }
    }
}

/// Target metric of a d to log-odds conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogitMetric {
    /// Logistic link `π/√3`
    #[default]
    Logit,
    /// Cox link 1.65
    CoxLogit,
}

/// Label identifying which branch produced an estimate
///
/// Serialized as the short label downstream pooling code keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectMeasure {
    #[serde(rename = "d")]
    D,
    #[serde(rename = "cox d")]
    CoxD,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "f")]
    F,
    #[serde(rename = "eta")]
    Eta,
    #[serde(rename = "logit")]
    Logit,
    #[serde(rename = "cox-logit")]
    CoxLogit,
    #[serde(rename = "or")]
    OddsRatio,
    #[serde(rename = "cox-or")]
    CoxOddsRatio,
}

impl EffectMeasure {
    /// Short label of the measure
    pub fn label(&self) -> &'static str {
        match self {
            Self::D => "d",
            Self::CoxD => "cox d",
            Self::G => "g",
            Self::F => "f",
            Self::Eta => "eta",
            Self::Logit => "logit",
            Self::CoxLogit => "cox-logit",
            Self::OddsRatio => "or",
            Self::CoxOddsRatio => "cox-or",
        }
    }

    /// Whether the estimate lives on a ratio scale (interval exponentiated)
    pub fn is_ratio(&self) -> bool {
        matches!(self, Self::OddsRatio | Self::CoxOddsRatio)
    }
}

impl fmt::Display for EffectMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
