//! Splitting delimited text into a header row and raw records.

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Header row and data rows of delimited text, all as raw strings.
///
/// Every row has exactly as many cells as the header: short rows are
/// padded with empty strings and extra cells are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Tokenize `content` using `delimiter`. The first row is the header.
pub fn tokenize(content: &str, delimiter: char) -> Result<RawTable> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| IngestError::Tokenize {
            message: format!("delimiter {delimiter:?} is not a single-byte character"),
        })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().take(width).map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    tracing::debug!(
        columns = width,
        rows = rows.len(),
        delimiter = %(delimiter as char).escape_default(),
        "tokenized delimited text"
    );
    Ok(RawTable { headers, rows })
}
