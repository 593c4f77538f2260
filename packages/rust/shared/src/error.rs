//! Error types for notebank.
//!
//! Library crates use [`NotebankError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all notebank operations.
#[derive(Debug, thiserror::Error)]
pub enum NotebankError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// HTML parsing or content extraction error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (bad directory layout, invalid filename, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NotebankError>;

impl NotebankError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = NotebankError::config("missing input directory");
        assert_eq!(err.to_string(), "config error: missing input directory");

        let err = NotebankError::validation("'notes.html' has no chapter prefix");
        assert!(err.to_string().contains("notes.html"));
    }

    #[test]
    fn io_error_includes_path() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = NotebankError::io("/tmp/sections", inner);
        assert!(err.to_string().contains("sections"));
    }
}
