//! Error types for effect size conversion
//!
//! Provides a unified error type for all esc crates.

use thiserror::Error;

/// Core error type for effect size conversions
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Neither a standard error nor a variance could be resolved
    #[error("Missing uncertainty: either standard error or variance must be specified")]
    MissingUncertainty,

    /// Insufficient sample size for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an odds ratio outside the domain of the logarithm
    pub fn invalid_odds_ratio(or: f64) -> Self {
        Self::InvalidParameter(format!("Odds ratio {or} must be positive and finite"))
    }

    /// Create an error for a variance that cannot be used for weighting
    pub fn invalid_variance(v: f64) -> Self {
        Self::InvalidParameter(format!("Variance {v} must be non-negative and finite"))
    }

    /// Create an error for a sample size that is not a non-negative whole number
    pub fn invalid_sample_size(n: f64) -> Self {
        Self::InvalidParameter(format!(
            "Total sample size {n} must be a non-negative whole number"
        ))
    }

    /// Create an error for a NaN/Inf input value
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
