//! DBF file reader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::{DbfError, Result};
use crate::header::{DbfHeader, parse_header};
use crate::types::{DbfField, DbfFieldType, DbfReaderOptions, DbfTable, DbfValue};

/// Deletion flag of a removed record.
const DELETED_FLAG: u8 = b'*';

/// DBF file reader.
pub struct DbfReader<R: Read> {
    reader: BufReader<R>,
    options: DbfReaderOptions,
}

impl<R: Read> DbfReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DbfReaderOptions::default())
    }

    pub fn with_options(reader: R, options: DbfReaderOptions) -> Self {
        Self {
            reader: BufReader::new(reader),
            options,
        }
    }

    /// Read the whole table into memory.
    pub fn read_table(mut self) -> Result<DbfTable> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        read_dbf_bytes(&data, &self.options)
    }
}

impl DbfReader<File> {
    /// Open a DBF file for reading.
    pub fn open(path: &Path, options: DbfReaderOptions) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DbfError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DbfError::Io(e)
            }
        })?;
        Ok(Self::with_options(file, options))
    }
}

/// Read a DBF file from a path.
pub fn read_dbf(path: &Path, options: &DbfReaderOptions) -> Result<DbfTable> {
    DbfReader::open(path, options.clone())?.read_table()
}

/// Parse DBF data already held in memory.
pub fn read_dbf_bytes(data: &[u8], options: &DbfReaderOptions) -> Result<DbfTable> {
    let header = parse_header(data)?;
    let body = record_area(data, &header)?;
    let encoding = resolve_encoding(options.encoding.as_deref(), body)?;

    let mut records = Vec::with_capacity(header.record_count);
    let mut deleted = 0usize;
    for (index, raw) in body.chunks_exact(header.record_len).enumerate() {
        if raw[0] == DELETED_FLAG {
            deleted += 1;
            continue;
        }
        records.push(parse_record(raw, &header.fields, encoding, index)?);
    }

    Ok(DbfTable {
        fields: header.fields,
        records,
        encoding: encoding.name(),
        deleted,
    })
}

/// Bytes holding exactly `record_count` records.
fn record_area<'a>(data: &'a [u8], header: &DbfHeader) -> Result<&'a [u8]> {
    let start = header.header_len;
    let needed = header
        .record_count
        .checked_mul(header.record_len)
        .ok_or_else(|| DbfError::invalid_format("record count overflow"))?;
    let available = data.len() - start;
    if available < needed {
        return Err(DbfError::TruncatedRecord {
            index: available / header.record_len,
        });
    }
    Ok(&data[start..start + needed])
}

fn resolve_encoding(label: Option<&str>, body: &[u8]) -> Result<&'static Encoding> {
    match label {
        Some(label) => {
            Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
                DbfError::UnknownEncoding {
                    label: label.to_string(),
                }
            })
        }
        None if std::str::from_utf8(body).is_ok() => Ok(UTF_8),
        None => Ok(WINDOWS_1252),
    }
}

fn parse_record(
    raw: &[u8],
    fields: &[DbfField],
    encoding: &'static Encoding,
    index: usize,
) -> Result<Vec<DbfValue>> {
    let mut values = Vec::with_capacity(fields.len());
    let mut offset = 1usize;
    for field in fields {
        let end = offset + usize::from(field.length);
        let bytes = raw
            .get(offset..end)
            .ok_or(DbfError::TruncatedRecord { index })?;
        values.push(parse_value(bytes, field.field_type, encoding));
        offset = end;
    }
    Ok(values)
}

fn parse_value(bytes: &[u8], field_type: DbfFieldType, encoding: &'static Encoding) -> DbfValue {
    match field_type {
        DbfFieldType::Numeric | DbfFieldType::Float => parse_numeric(bytes),
        DbfFieldType::Logical => parse_logical(bytes),
        DbfFieldType::Date => parse_date(bytes),
        DbfFieldType::Character | DbfFieldType::Other(_) => {
            DbfValue::Character(decode_text(bytes, encoding))
        }
    }
}

fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    text.trim_end_matches([' ', '\0']).to_string()
}

/// Blank, overflow (`***`) and unparseable numbers read as null.
fn parse_numeric(bytes: &[u8]) -> DbfValue {
    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim_matches([' ', '\0']);
    if trimmed.is_empty() || trimmed.starts_with('*') {
        return DbfValue::Null;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map_or(DbfValue::Null, DbfValue::Number)
}

fn parse_logical(bytes: &[u8]) -> DbfValue {
    match bytes.first() {
        Some(b'T' | b't' | b'Y' | b'y') => DbfValue::Logical(true),
        Some(b'F' | b'f' | b'N' | b'n') => DbfValue::Logical(false),
        _ => DbfValue::Null,
    }
}

fn parse_date(bytes: &[u8]) -> DbfValue {
    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim_matches([' ', '\0']);
    if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return DbfValue::Null;
    }
    DbfValue::Date(format!(
        "{}-{}-{}",
        &trimmed[0..4],
        &trimmed[4..6],
        &trimmed[6..8]
    ))
}
