//! Non-fatal diagnostics attached to a conversion

use std::fmt;
use tracing::warn;

/// A condition that degraded a conversion without failing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Neither a standard error nor a variance was supplied; the result is
    /// the missing sentinel
    MissingUncertainty,
    /// Hedges' g was requested without a total sample size; the result is the
    /// uncorrected d
    MissingTotalN,
}

impl Notice {
    /// Log the notice as a warning event
    pub(crate) fn emit(self) -> Self {
        warn!("{}", self);
        self
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingUncertainty => "Either standard error or variance must be specified.",
            Self::MissingTotalN => "total sample size is needed to calculate Hedges' g",
        };
        f.write_str(s)
    }
}
