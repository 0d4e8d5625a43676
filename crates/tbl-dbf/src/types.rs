//! Core types for DBF tables.

use std::fmt;

/// DBF column type, from the descriptor's type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbfFieldType {
    /// `C`: fixed-width text.
    Character,
    /// `N`: number stored as ASCII text.
    Numeric,
    /// `F`: floating point stored as ASCII text.
    Float,
    /// `L`: single-character boolean.
    Logical,
    /// `D`: `YYYYMMDD`.
    Date,
    /// Memo, binary and other types; read as raw text.
    Other(u8),
}

impl DbfFieldType {
    pub fn from_byte(code: u8) -> Self {
        match code.to_ascii_uppercase() {
            b'C' => Self::Character,
            b'N' => Self::Numeric,
            b'F' => Self::Float,
            b'L' => Self::Logical,
            b'D' => Self::Date,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Character => 'C',
            Self::Numeric => 'N',
            Self::Float => 'F',
            Self::Logical => 'L',
            Self::Date => 'D',
            Self::Other(code) => code as char,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric | Self::Float)
    }
}

impl fmt::Display for DbfFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbfField {
    pub name: String,
    pub field_type: DbfFieldType,
    /// Width in bytes within a record.
    pub length: u8,
    pub decimals: u8,
}

/// A decoded cell.
#[derive(Debug, Clone, PartialEq)]
pub enum DbfValue {
    Character(String),
    Number(f64),
    Logical(bool),
    /// ISO `YYYY-MM-DD`.
    Date(String),
    Null,
}

impl DbfValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// A fully read DBF table.
#[derive(Debug, Clone)]
pub struct DbfTable {
    pub fields: Vec<DbfField>,
    pub records: Vec<Vec<DbfValue>>,
    /// Name of the encoding used for text fields.
    pub encoding: &'static str,
    /// Records flagged as deleted and skipped.
    pub deleted: usize,
}

impl DbfTable {
    pub fn num_rows(&self) -> usize {
        self.records.len()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Options for reading DBF files.
#[derive(Debug, Clone, Default)]
pub struct DbfReaderOptions {
    /// Encoding label for text fields (any WHATWG label, e.g. `latin1`).
    ///
    /// When unset, UTF-8 is used if the record data is valid UTF-8 and
    /// windows-1252 otherwise.
    pub encoding: Option<String>,
}

impl DbfReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_from_byte() {
        assert_eq!(DbfFieldType::from_byte(b'C'), DbfFieldType::Character);
        assert_eq!(DbfFieldType::from_byte(b'n'), DbfFieldType::Numeric);
        assert_eq!(DbfFieldType::from_byte(b'M'), DbfFieldType::Other(b'M'));
        assert!(DbfFieldType::Float.is_numeric());
        assert_eq!(DbfFieldType::Other(b'M').to_string(), "M");
    }
}
