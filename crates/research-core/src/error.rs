//! Error types for research statistics
//!
//! Provides a unified error type for all research-stats crates.

use thiserror::Error;

/// Core error type for research statistical operations
///
/// Degenerate samples are not errors: statistics over too few
/// observations evaluate to NaN. Errors are reserved for invalid
/// parameters and for tests that cannot run at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a confidence level outside `[0, 1]`
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in [0, 1]"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Fail with [`Error::InsufficientData`] when fewer than `expected`
    /// observations are available
    pub fn require_observations(expected: usize, actual: usize) -> Result<()> {
        if actual < expected {
            return Err(Self::InsufficientData { expected, actual });
        }
        Ok(())
    }
}
