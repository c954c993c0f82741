//! Error types for familyvault.
//!
//! Records themselves never fail to construct. The errors here cover the
//! ambient work around them: loading configuration and writing output.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for familyvault operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// A configuration file named for validation does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Output Errors ===
    /// Writing a confirmation or report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for familyvault operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from loading or validating configuration.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigLoad(_) | Self::ConfigNotFound { .. } | Self::ConfigValidation { .. }
        )
    }
}
