//! Core error and numeric types for effect size conversion
//!
//! Every crate in the workspace returns [`Result`] with the shared [`Error`]
//! type and writes its scalar transforms against [`Scalar`].

pub mod error;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::{present, Scalar};
