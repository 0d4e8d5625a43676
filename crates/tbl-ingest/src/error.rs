//! Error types for table import.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Delimited Text Errors ===
    /// The tokenizer rejected the text.
    #[error("failed to parse delimited text: {message}")]
    Tokenize { message: String },

    /// Text produced no data records.
    #[error("no records found")]
    EmptyTable,

    /// A delimited text source could not be imported.
    #[error("unable to import file: {name}")]
    Unreadable {
        name: String,
        #[source]
        source: Box<IngestError>,
    },

    // === Binary Table Errors ===
    /// Failed to read a dBase table.
    #[error(transparent)]
    Dbf(#[from] tbl_dbf::DbfError),

    // === Conversion Errors ===
    /// A value did not parse as a number under the strict policy.
    #[error("invalid number '{value}' in field {field} (row {row})")]
    InvalidNumber {
        field: String,
        row: usize,
        value: String,
    },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::Tokenize {
            message: err.to_string(),
        }
    }
}

impl IngestError {
    /// Wrap a text-import failure in a single message naming the source.
    pub fn unreadable(name: impl Into<String>, source: IngestError) -> Self {
        Self::Unreadable {
            name: name.into(),
            source: Box::new(source),
        }
    }
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/file.csv");

        let err = IngestError::unreadable("counties.csv", IngestError::EmptyTable);
        assert_eq!(err.to_string(), "unable to import file: counties.csv");
    }

    #[test]
    fn test_unreadable_keeps_cause() {
        use std::error::Error as _;

        let err = IngestError::unreadable("a.txt", IngestError::EmptyTable);
        let cause = err.source().map(ToString::to_string);
        assert_eq!(cause.as_deref(), Some("no records found"));
    }
}
