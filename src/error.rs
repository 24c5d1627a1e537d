//! Type composition errors.

use thiserror::Error;

/// Errors that can occur while defining, applying, or invoking type capabilities.
#[derive(Debug, Error)]
pub enum TypeError {
    /// A capability could not be registered (no resolvable name, empty key).
    #[error("Invalid capability: {0}")]
    InvalidCapability(String),

    /// A capability was invoked by a name the receiver does not carry.
    #[error("Missing capability: {0}")]
    MissingCapability(String),

    /// A field was invoked but holds plain data.
    #[error("Field is not callable: {0}")]
    NotCallable(String),

    /// A JSON value could not be turned into a record.
    #[error("Not a record: {0}")]
    NotARecord(String),

    /// A capability body reported a failure.
    #[error("Capability invocation failed: {0}")]
    Invocation(String),

    /// Registry configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TypeError>;
