//! Error types for API key operations.

use thiserror::Error;

/// Errors raised while checking an existing key value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiKeyError {
    /// Random part has the wrong length or contains non-hex characters
    #[error("Invalid key format")]
    InvalidFormat,

    /// Key prefix doesn't match expected value
    #[error("Invalid prefix: expected '{expected}', got '{got}'")]
    InvalidPrefix { expected: String, got: String },
}

/// Errors raised while validating user input for a new key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Network identifier is empty after trimming
    #[error("Network UUID is required")]
    MissingNetworkId,

    /// Network identifier is not in 8-4-4-4-12 hex form
    #[error("Malformed network UUID '{0}'")]
    MalformedNetworkId(String),
}

/// Result type alias for API key operations.
pub type Result<T> = std::result::Result<T, ApiKeyError>;
