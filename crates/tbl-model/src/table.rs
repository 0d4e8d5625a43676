use indexmap::IndexMap;
use serde::Serialize;

use crate::value::{FieldType, Value};

/// One row: field name to value, in header order.
pub type Record = IndexMap<String, Value>;

/// Where a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Delimited text (comma, tab or pipe separated).
    Delimited,
    /// dBase table.
    Dbf,
}

impl SourceFormat {
    /// Picks the format from a file name; anything not ending in `.dbf` is text.
    pub fn from_name(name: &str) -> Self {
        if name.to_ascii_lowercase().ends_with(".dbf") {
            Self::Dbf
        } else {
            Self::Delimited
        }
    }
}

/// Non-fatal anomaly noticed during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportWarning {
    /// Header token with a type suffix other than `:num`/`:str`.
    InvalidTypeHint { token: String },
    /// Values in a numeric field that did not parse.
    UnparsedNumbers { field: String, count: usize },
}

impl std::fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTypeHint { token } => {
                write!(f, "Invalid type hint (expected :str or :num) [{token}]")
            }
            Self::UnparsedNumbers { field, count } => {
                write!(f, "{count} value(s) in field {field} could not be read as numbers")
            }
        }
    }
}

/// Metadata recorded alongside imported records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportInfo {
    /// File name or buffer label.
    pub source: String,
    pub format: SourceFormat,
    /// Detected field separator, text sources only.
    pub delimiter: Option<char>,
    /// Conversions applied to each field, in field order.
    pub conversions: IndexMap<String, FieldType>,
    pub warnings: Vec<ImportWarning>,
}

impl ImportInfo {
    pub fn new(source: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            source: source.into(),
            format,
            delimiter: None,
            conversions: IndexMap::new(),
            warnings: Vec::new(),
        }
    }
}

/// An imported table.
#[derive(Debug, Clone, Serialize)]
pub struct DataTable {
    pub fields: Vec<String>,
    pub records: Vec<Record>,
    pub info: ImportInfo,
}

impl DataTable {
    pub fn new(fields: Vec<String>, records: Vec<Record>, info: ImportInfo) -> Self {
        Self {
            fields,
            records,
            info,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Value of `field` in row `row`.
    pub fn get(&self, row: usize, field: &str) -> Option<&Value> {
        self.records.get(row)?.get(field)
    }

    /// Native type of a field, judged by the first non-missing value.
    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        self.records
            .iter()
            .filter_map(|record| record.get(field))
            .find(|value| !value.is_missing())
            .and_then(Value::field_type)
    }
}
