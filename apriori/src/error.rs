//! Error types for apriori
//!
//! Two kinds of failure exist: a caller handed in thresholds we cannot mine
//! with, or the miner broke one of its own invariants. An empty rule set is
//! not an error.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AprioriError>;

/// Main error type for apriori
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AprioriError {
    /// Configuration validation failed (thresholds out of range, zero max length)
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Internal consistency failure (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AprioriError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True when the error signals a defect rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AprioriError::invalid_config("min_support must be between 0 and 1, got 1.5");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: min_support must be between 0 and 1, got 1.5"
        );

        let err = AprioriError::internal("confidence 1.2 out of range");
        assert_eq!(err.to_string(), "Internal error: confidence 1.2 out of range");
    }

    #[test]
    fn test_is_internal() {
        assert!(AprioriError::internal("x").is_internal());
        assert!(!AprioriError::invalid_config("x").is_internal());
    }
}
