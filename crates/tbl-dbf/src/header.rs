//! DBF file header and field descriptor parsing.
//!
//! # Header (32 bytes)
//!
//! | Offset | Field         | Type   |
//! |--------|---------------|--------|
//! | 0      | version       | u8     |
//! | 1-3    | last update   | YYMMDD |
//! | 4-7    | record count  | u32 LE |
//! | 8-9    | header length | u16 LE |
//! | 10-11  | record length | u16 LE |
//! | 12-31  | reserved      |        |
//!
//! # Field descriptor (32 bytes each, list ends with `0x0D`)
//!
//! | Offset | Field    | Type     |
//! |--------|----------|----------|
//! | 0-10   | name     | char[11] |
//! | 11     | type     | char     |
//! | 12-15  | reserved |          |
//! | 16     | length   | u8       |
//! | 17     | decimals | u8       |
//! | 18-31  | reserved |          |

use crate::error::{DbfError, Result};
use crate::types::{DbfField, DbfFieldType};

/// Size of the file header and of each field descriptor.
pub const HEADER_LEN: usize = 32;
pub const DESCRIPTOR_LEN: usize = 32;

/// Marks the end of the field descriptor array.
pub const DESCRIPTOR_TERMINATOR: u8 = 0x0D;

/// Parsed file header.
#[derive(Debug, Clone)]
pub struct DbfHeader {
    pub version: u8,
    pub record_count: usize,
    pub header_len: usize,
    pub record_len: usize,
    pub fields: Vec<DbfField>,
}

/// Parse the header and field descriptors at the start of `data`.
pub fn parse_header(data: &[u8]) -> Result<DbfHeader> {
    if data.len() < HEADER_LEN + 1 {
        return Err(DbfError::invalid_format("file too small"));
    }

    let version = data[0];
    let record_count = read_u32(data, 4) as usize;
    let header_len = read_u16(data, 8) as usize;
    let record_len = read_u16(data, 10) as usize;

    if header_len < HEADER_LEN + 1 || header_len > data.len() {
        return Err(DbfError::invalid_format(format!(
            "header length {header_len} out of range"
        )));
    }
    if record_len == 0 {
        return Err(DbfError::invalid_format("record length is zero"));
    }

    let fields = parse_descriptors(&data[HEADER_LEN..header_len])?;

    // Each record starts with the deletion flag.
    let width: usize = 1 + fields.iter().map(|f| usize::from(f.length)).sum::<usize>();
    if width > record_len {
        return Err(DbfError::invalid_format(format!(
            "fields need {width} bytes but records are {record_len} bytes"
        )));
    }

    Ok(DbfHeader {
        version,
        record_count,
        header_len,
        record_len,
        fields,
    })
}

fn parse_descriptors(data: &[u8]) -> Result<Vec<DbfField>> {
    let mut fields = Vec::new();
    let mut offset = 0usize;

    loop {
        match data.get(offset) {
            None => return Err(DbfError::invalid_format("missing field terminator")),
            Some(&DESCRIPTOR_TERMINATOR) => break,
            Some(_) => {}
        }
        let Some(descriptor) = data.get(offset..offset + DESCRIPTOR_LEN) else {
            return Err(DbfError::invalid_format("truncated field descriptor"));
        };
        fields.push(parse_descriptor(descriptor, fields.len())?);
        offset += DESCRIPTOR_LEN;
    }

    if fields.is_empty() {
        return Err(DbfError::invalid_format("no fields defined"));
    }
    Ok(fields)
}

fn parse_descriptor(data: &[u8], index: usize) -> Result<DbfField> {
    let name = read_name(&data[0..11]);
    if name.is_empty() {
        return Err(DbfError::invalid_field(index, "empty field name"));
    }
    let length = data[16];
    if length == 0 {
        return Err(DbfError::invalid_field(index, "field length is zero"));
    }
    Ok(DbfField {
        name,
        field_type: DbfFieldType::from_byte(data[11]),
        length,
        decimals: data[17],
    })
}

/// Field names are NUL-padded ASCII.
fn read_name(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).trim().to_string()
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
