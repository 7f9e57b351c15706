//! Error types for Remold.

use crate::value::Kind;
use thiserror::Error;

/// Remold error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoldError {
    /// Top-level argument had the wrong structural kind
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: Kind, got: Kind },

    /// Caller-supplied key function returned no key for an element
    #[error("Key function failed for element at index {index}")]
    KeyFn { index: usize },

    /// Requested bucket count cannot partition anything
    #[error("Invalid bucket count: {0}")]
    InvalidBucketCount(usize),
}

/// Result type alias for Remold operations.
pub type Result<T> = std::result::Result<T, RemoldError>;
