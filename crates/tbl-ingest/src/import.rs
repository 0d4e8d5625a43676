//! Table import: dBase tables are read as-is, delimited text goes through
//! delimiter detection, type hints, inference and conversion.

use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use tbl_dbf::{DbfReaderOptions, DbfTable, DbfValue, read_dbf_bytes};
use tbl_model::{
    DataTable, FieldHints, ImportInfo, ImportOptions, ImportWarning, Record, SourceFormat, Value,
};
use tracing::{debug, info_span};

use crate::convert::apply_conversion_plan;
use crate::delimiter::guess_delimiter;
use crate::error::{IngestError, Result};
use crate::hints::parse_field_headers;
use crate::infer::build_conversion_plan;
use crate::tokenize::tokenize;

/// Source label for text imported without a file or buffer name.
pub const TEXT_SOURCE_NAME: &str = "<text>";

/// Where table data comes from.
#[derive(Debug, Clone)]
pub enum ImportSource {
    /// A file on disk.
    Path(PathBuf),
    /// Bytes already in memory; `name` picks the format and labels errors.
    Buffer { name: String, bytes: Vec<u8> },
}

impl ImportSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn buffer(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Buffer {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Path or buffer label, as shown in messages.
    pub fn name(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Buffer { name, .. } => name.clone(),
        }
    }

    pub fn format(&self) -> SourceFormat {
        SourceFormat::from_name(&self.name())
    }
}

/// Import a table from a file or buffer.
///
/// Any failure to tokenize delimited text, including text without data
/// rows, is reported as [`IngestError::Unreadable`] naming the source.
pub fn import_table(source: &ImportSource, options: &ImportOptions) -> Result<DataTable> {
    let name = source.name();
    let format = source.format();
    let span = info_span!("import", source = %name, format = ?format);
    let _guard = span.enter();

    let bytes = load_bytes(source)?;
    match format {
        SourceFormat::Dbf => import_dbf_table(&bytes, &name, options),
        SourceFormat::Delimited => {
            let (content, _) = UTF_8.decode_with_bom_removal(&bytes);
            let mut table = import_delimited_text(&content, options).map_err(|err| match err {
                IngestError::Tokenize { .. } | IngestError::EmptyTable => {
                    IngestError::unreadable(name.as_str(), err)
                }
                other => other,
            })?;
            table.info.source = name;
            Ok(table)
        }
    }
}

/// Import a file, choosing the reader by extension.
pub fn import_data_file(path: &Path, options: &ImportOptions) -> Result<DataTable> {
    import_table(&ImportSource::path(path), options)
}

fn load_bytes(source: &ImportSource) -> Result<Vec<u8>> {
    match source {
        ImportSource::Buffer { bytes, .. } => Ok(bytes.clone()),
        ImportSource::Path(path) => std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound { path: path.clone() }
            } else {
                IngestError::FileRead {
                    path: path.clone(),
                    source: e,
                }
            }
        }),
    }
}

/// Import delimited text held in memory.
///
/// The delimiter is guessed from the first line. Hints in the header row
/// are applied first, then those in `options.field_types`, so the option
/// list wins. Types are inferred from the first record only.
pub fn import_delimited_text(content: &str, options: &ImportOptions) -> Result<DataTable> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let delimiter = guess_delimiter(content);
    let raw = tokenize(content, delimiter)?;
    if raw.is_empty() {
        return Err(IngestError::EmptyTable);
    }

    let mut info = ImportInfo::new(TEXT_SOURCE_NAME, SourceFormat::Delimited);
    info.delimiter = Some(delimiter);

    let mut hints = FieldHints::new();
    let headers = parse_field_headers(&raw.headers, &mut hints);
    let mut invalid = headers.invalid_hints;
    if let Some(field_types) = &options.field_types {
        invalid.extend(parse_field_headers(field_types, &mut hints).invalid_hints);
    }
    info.warnings.extend(
        invalid
            .into_iter()
            .map(|token| ImportWarning::InvalidTypeHint { token }),
    );

    let mut records: Vec<Record> = raw
        .rows
        .into_iter()
        .map(|row| {
            headers
                .names
                .iter()
                .cloned()
                .zip(row.into_iter().map(Value::Text))
                .collect()
        })
        .collect();

    let plan = build_conversion_plan(&records[0], &hints);
    let summary = apply_conversion_plan(&mut records, &plan, options.policy)?;
    debug!(
        records = records.len(),
        converted_fields = plan.len(),
        hints = hints.len(),
        "imported delimited text"
    );

    info.warnings.extend(
        summary
            .unparsed
            .into_iter()
            .map(|(field, count)| ImportWarning::UnparsedNumbers { field, count }),
    );
    info.conversions = plan.into_inner();

    let fields = records[0].keys().cloned().collect();
    Ok(DataTable::new(fields, records, info))
}

/// Import a dBase table held in memory.
///
/// Values arrive already typed, so no inference takes place and
/// `options.field_types` is not consulted.
pub fn import_dbf_table(bytes: &[u8], name: &str, options: &ImportOptions) -> Result<DataTable> {
    if options.field_types.is_some() {
        debug!("field type hints are not applied to dBase tables");
    }
    let reader_options = DbfReaderOptions {
        encoding: options.encoding.clone(),
    };
    let dbf = read_dbf_bytes(bytes, &reader_options)?;
    debug!(
        records = dbf.num_rows(),
        deleted = dbf.deleted,
        encoding = dbf.encoding,
        "read dBase table"
    );
    Ok(dbf_to_table(dbf, name))
}

fn dbf_to_table(dbf: DbfTable, name: &str) -> DataTable {
    let fields: Vec<String> = dbf.field_names().map(str::to_string).collect();
    let records = dbf
        .records
        .into_iter()
        .map(|row| {
            fields
                .iter()
                .cloned()
                .zip(row.into_iter().map(dbf_value))
                .collect()
        })
        .collect();
    DataTable::new(fields, records, ImportInfo::new(name, SourceFormat::Dbf))
}

fn dbf_value(value: DbfValue) -> Value {
    match value {
        DbfValue::Character(text) | DbfValue::Date(text) => Value::Text(text),
        DbfValue::Number(v) => Value::Number(v),
        DbfValue::Logical(flag) => Value::Text(flag.to_string()),
        DbfValue::Null => Value::Missing,
    }
}
