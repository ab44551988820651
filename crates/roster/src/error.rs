//! Error types for roster.
//!
//! This module defines all error types used throughout the roster crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for roster operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// Caller input failed a type or range check.
    #[error("{message}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// User-facing description of the failure.
        message: String,
    },

    /// No record carries the requested id.
    #[error("Student not found! (id {id})")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    // === Storage Errors ===
    /// The data file holds a line or id that cannot be interpreted.
    #[error("malformed data in {}{}: {message}", .path.display(), line_suffix(.line))]
    Format {
        /// Path to the data file.
        path: PathBuf,
        /// 1-based line number, when the problem is tied to one line.
        line: Option<usize>,
        /// Description of what went wrong.
        message: String,
    },

    /// Failed to read the data file.
    #[error("failed to read data file {path}: {source}")]
    StorageRead {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the data file.
    #[error("failed to write data file {path}: {source}")]
    StorageWrite {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[allow(clippy::ref_option)]
fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// A specialized Result type for roster operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error for the given field.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a new not-found error for the given id.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a new format error.
    #[must_use]
    pub fn format(path: impl Into<PathBuf>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Check if this error means the requested record does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a rejected input.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error comes from malformed stored data.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
