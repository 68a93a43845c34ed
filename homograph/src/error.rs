//! Error types for the homograph library.
//!
//! Canonicalization and homograph comparison are total and never fail. The
//! errors here come from the layers around them: configuration loading,
//! validation, and report serialization.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a homograph error.
///
/// # Examples
///
/// ```
/// use homograph::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/home/user".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the homograph library.
#[derive(Debug, Error)]
pub enum Error {
    /// A filesystem path (such as a configuration file) could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path could not be used.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use homograph::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "working_dir".to_string(),
    ///     message: "must be absolute".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
