//! Error types for Unox operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Unox crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Message carried by [`Error::ValidationFailed`].
pub const VALIDATION_FAILED_MESSAGE: &str = "Predicate must be true to pass";

/// Errors that can occur in Unox operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error attributed to a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    IoPath {
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Output mode string could not be parsed.
    #[error("Invalid output mode: {0}")]
    InvalidMode(String),

    /// File traversal pattern could not be compiled.
    #[error("Invalid pattern: {0}")]
    Pattern(String),

    /// A value did not satisfy its predicate.
    #[error("Predicate must be true to pass")]
    ValidationFailed,
}

impl Error {
    /// Create an I/O error without path context.
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(err)
    }

    /// Create an I/O error for the given path.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoPath {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }

    /// Create an invalid output mode error.
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode(mode.into())
    }

    /// Create a pattern error.
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Whether this error came from a failed validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationFailed)
    }

    /// Whether this error came from the file system.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::IoPath { .. })
    }

    /// Kind of the underlying I/O error, if any.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io(e) | Self::IoPath { source: e, .. } => Some(e.kind()),
            _ => None,
        }
    }
}

/// Result type alias using Unox's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_validation_message() {
        let err = Error::ValidationFailed;
        assert_eq!(err.to_string(), VALIDATION_FAILED_MESSAGE);
        assert!(err.is_validation());
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            io::Error::new(io::ErrorKind::NotFound, "missing"),
            "/tmp/nowhere.txt",
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/nowhere.txt"));
        assert!(msg.contains("missing"));
        assert!(err.is_io());
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_from_io_error() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.is_io());
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(Error::invalid_mode("q"), Error::InvalidMode(m) if m == "q"));
        assert!(matches!(Error::pattern("bad"), Error::Pattern(m) if m == "bad"));
        assert_eq!(Error::invalid_mode("q").io_kind(), None);
    }
}
