//! Error types for key store operations.

use std::path::PathBuf;

use api_key::ValidationError;
use thiserror::Error;

use crate::notify::Notification;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a slot file failed
    #[error("Storage I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// SQLite backend failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Errors that can occur during key store operations.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// User input rejected before any state change
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with the given id or key
    #[error("API key not found: {0}")]
    NotFound(String),

    /// Every generated key collided with an existing one
    #[error("Could not generate a unique key after {0} attempts")]
    KeyCollision(usize),

    /// Stored slot content is not a valid record list
    #[error("Stored API keys are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to serialize API keys: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration is well-formed but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeyStoreError {
    /// User-facing notification for this error.
    pub fn notification(&self) -> Notification {
        match self {
            KeyStoreError::Validation(ValidationError::MissingNetworkId) => {
                Notification::error("Please enter the network UUID")
            }
            KeyStoreError::Validation(ValidationError::MalformedNetworkId(_)) => {
                Notification::error(
                    "Invalid UUID format. Example: 550e8400-e29b-41d4-a716-446655440000",
                )
            }
            KeyStoreError::NotFound(id) => Notification::warning(format!("API key '{id}' not found")),
            other => Notification::error(other.to_string()),
        }
    }
}

/// Result type for key store operations.
pub type Result<T> = std::result::Result<T, KeyStoreError>;
