//! # Error Types Module
//!
//! This module defines the error types for Nearlite operations, providing
//! structured error handling instead of string-based error matching.

use thiserror::Error;

/// Main error type for Nearlite operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NearliteError {
    /// Invalid configuration at collection-creation time
    #[error("Invalid configuration: {reason}")]
    Configuration { reason: String },

    /// Invalid record in an insert batch (empty id or empty text)
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Embedding function returned a vector of unexpected length
    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl NearliteError {
    /// Check if the caller can recover by fixing the offending input and retrying.
    ///
    /// Configuration errors are fatal to the creation call. Input and dimension
    /// errors leave the collection unchanged, so re-submitting corrected records
    /// is safe.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NearliteError::Configuration { .. })
    }
}

/// Result type for Nearlite operations
pub type NearliteResult<T> = Result<T, NearliteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NearliteError::Configuration {
            reason: "collection name must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: collection name must not be empty"
        );

        let err = NearliteError::DimensionMismatch { expected: 384, actual: 256 };
        assert_eq!(
            err.to_string(),
            "Vector dimension mismatch: expected 384, got 256"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(!NearliteError::Configuration { reason: "bad metric".to_string() }.is_recoverable());
        assert!(NearliteError::InvalidInput { reason: "empty id".to_string() }.is_recoverable());
        assert!(NearliteError::DimensionMismatch { expected: 3, actual: 2 }.is_recoverable());
    }
}
