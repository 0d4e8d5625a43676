//! Error types for DBF file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading DBF files.
#[derive(Debug, Error)]
pub enum DbfError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Invalid DBF file format.
    #[error("invalid DBF file: {message}")]
    InvalidFormat { message: String },

    /// Invalid field descriptor.
    #[error("invalid field descriptor at index {index}: {message}")]
    InvalidField { index: usize, message: String },

    /// Record data runs past the end of the file.
    #[error("record {index} is truncated")]
    TruncatedRecord { index: usize },

    /// Encoding label not recognised.
    #[error("unknown encoding: {label}")]
    UnknownEncoding { label: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DbfError {
    /// Create an InvalidFormat error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an InvalidField error.
    pub fn invalid_field(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            message: message.into(),
        }
    }
}

/// Result type for DBF operations.
pub type Result<T> = std::result::Result<T, DbfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DbfError::invalid_format("file too small");
        assert_eq!(format!("{err}"), "invalid DBF file: file too small");

        let err = DbfError::invalid_field(2, "empty field name");
        assert_eq!(
            format!("{err}"),
            "invalid field descriptor at index 2: empty field name"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "test");
        let dbf_err: DbfError = io_err.into();
        assert!(matches!(dbf_err, DbfError::Io(_)));
    }
}
