//! Error types for the localstate library
//!
//! This module provides a unified error handling system using `thiserror` for
//! all components of the library.

use thiserror::Error;

/// The main error type for the localstate library
#[derive(Error, Debug)]
pub enum Error {
    /// Component configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// State store operation errors
    #[error("State error: {0}")]
    State(#[from] StateError),
}

/// Configuration-specific error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required metadata property missing or empty
    #[error("missing or empty {field} field from metadata")]
    MissingField {
        /// Name of the missing metadata field
        field: String,
    },

    /// No store registered under the requested type identifier
    #[error("unknown state store type: {type_id}")]
    UnknownStoreType {
        /// The unrecognized store type identifier
        type_id: String,
    },
}

/// State-store-specific error types
#[derive(Error, Debug)]
pub enum StateError {
    /// Get targeted a key with no stored value
    #[error("state not found for key: {key}")]
    NotFound {
        /// The key that had no stored value
        key: String,
    },

    /// Filesystem failure during read, write or delete
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured value could not be encoded to JSON
    #[error("value encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Operation invoked before a successful init
    #[error("state store has not been initialized")]
    NotInitialized,
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience type alias for configuration Results
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Convenience type alias for state store Results
pub type StateResult<T> = std::result::Result<T, StateError>;
