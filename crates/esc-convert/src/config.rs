//! Configuration shared by the converters

use esc_confidence::{ConfidenceLevel, NormalBounds};
use esc_core::Result;

/// Settings applied to every result a converter assembles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConversionConfig {
    /// Bounds used for `ci.lo` / `ci.hi`
    bounds: NormalBounds,
}

impl ConversionConfig {
    /// Configuration with intervals at the given confidence level
    pub fn new(level: ConfidenceLevel) -> Result<Self> {
        Ok(Self {
            bounds: NormalBounds::new(level)?,
        })
    }

    /// Confidence level of the assembled intervals
    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.bounds.level()
    }

    /// Bound calculator for result assembly
    pub fn bounds(&self) -> NormalBounds {
        self.bounds
    }
}
