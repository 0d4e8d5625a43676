//! Table import.
//!
//! Turns delimited text or dBase files into a [`tbl_model::DataTable`] of
//! typed records.
//!
//! # Features
//!
//! - **Delimiter Detection**: Pipe, tab or comma, guessed from the first line
//! - **Type Hints**: `NAME:str`, `POP:num` and `+AREA` in header names, or
//!   the same tokens passed as options
//! - **Type Inference**: Numeric-looking text in the first record makes the
//!   whole field numeric
//! - **Conversion**: Planned fields are coerced in place; failures become
//!   `NotANumber` values (or an error under the strict policy)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tbl_ingest::import_data_file;
//! use tbl_model::ImportOptions;
//!
//! let options = ImportOptions::new().with_field_types(["FIPS:str"]);
//! let table = import_data_file(Path::new("counties.csv"), &options)?;
//! println!("{} records, fields {:?}", table.len(), table.fields);
//! # Ok::<(), tbl_ingest::IngestError>(())
//! ```

mod convert;
mod delimiter;
mod error;
mod hints;
mod import;
mod infer;
mod tokenize;

// === Error Types ===
pub use error::{IngestError, Result};

// === Delimiter Detection ===
pub use delimiter::{DEFAULT_DELIMITER, DELIMITERS, delimiter_pattern, guess_delimiter};

// === Header Hints ===
pub use hints::{ParsedHeaders, parse_field_headers, parse_field_type, remove_type_hints};

// === Type Inference ===
pub use infer::{build_conversion_plan, clean_number, looks_numeric, parse_number};

// === Conversion ===
pub use convert::{ConversionSummary, apply_conversion_plan, convert_value};

// === Tokenizing ===
pub use tokenize::{RawTable, tokenize};

// === Import Pipeline ===
pub use import::{
    ImportSource, TEXT_SOURCE_NAME, import_data_file, import_dbf_table, import_delimited_text,
    import_table,
};
