//! Error types for the stfolder library.
//!
//! Canonicalization itself never fails; these errors come from the
//! operations around it: reading configuration, validating folders and
//! creating marker files. They use `thiserror` for ergonomic handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an stfolder error.
///
/// # Examples
///
/// ```
/// use stfolder::{Error, Result};
///
/// fn example_operation() -> Result<i32> {
///     Ok(60)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the stfolder library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be processed.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path could not be processed.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Two folders share an identifier.
    #[error("duplicate folder id '{id}'")]
    DuplicateFolder {
        /// The repeated folder identifier.
        id: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The folder marker file could not be created.
    #[error("cannot create folder marker {}: {source}", path.display())]
    MarkerCreation {
        /// Where the marker should have been created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use stfolder::Error;
    ///
    /// let err = Error::NotFound { resource: "folder default".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error comes from configuration validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::DuplicateFolder { .. })
    }
}
