//! Error types for client proxy generation.
//!
//! This module provides the error hierarchy shared by every crate in the
//! workspace. Skipped controllers and actions are not errors, and neither is
//! a malformed type name: both are handled silently by the generator.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_core::{Error, Result};
//!
//! fn check_folder(folder: &str) -> Result<()> {
//!     if folder.ends_with(".cs") {
//!         return Err(Error::UsageError {
//!             message: "Option folder should be a directory.".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_folder("Proxies.cs").unwrap_err();
//! assert!(err.is_usage_error());
//! ```

use thiserror::Error;

/// Main error type for client proxy generation.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid command usage.
    ///
    /// Raised before generation starts when the work directory is missing,
    /// has no client project file, or the folder option names a file.
    #[error("Usage error: {message}")]
    UsageError {
        /// Description of the usage problem
        message: String,
    },

    /// File-system operation failed.
    ///
    /// File-system errors are fatal for the current run.
    #[error("I/O error at {path}")]
    Io {
        /// Path the operation was working on
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization, deserialization, or template rendering failed.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Fetching the api description model failed.
    #[error("Failed to fetch api description model from {url}")]
    ModelFetch {
        /// Endpoint that was queried
        url: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a usage error.
    ///
    /// # Examples
    ///
    /// ```
    /// use proxy_gen_core::Error;
    ///
    /// let err = Error::UsageError {
    ///     message: "Specified directory does not exist.".to_string(),
    /// };
    /// assert!(err.is_usage_error());
    /// ```
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::UsageError { .. })
    }

    /// Returns `true` if this is a file-system error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is a model fetch error.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::ModelFetch { .. })
    }

    /// Creates an I/O error for the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use proxy_gen_core::Error;
    /// use std::io;
    ///
    /// let err = Error::io("ClientProxies", io::Error::from(io::ErrorKind::PermissionDenied));
    /// assert!(err.is_io_error());
    /// assert!(err.to_string().contains("ClientProxies"));
    /// ```
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for proxy generation operations.
pub type Result<T> = std::result::Result<T, Error>;
