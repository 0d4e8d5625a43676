//! dBase (DBF) table reader.
//!
//! Reads dBase III-style tables as found next to shapefiles. Values come
//! back already typed: numeric fields as numbers, logical fields as
//! booleans, dates as ISO strings, text decoded with the chosen encoding.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tbl_dbf::{DbfReaderOptions, read_dbf};
//!
//! let options = DbfReaderOptions::new().with_encoding("latin1");
//! let table = read_dbf(Path::new("counties.dbf"), &options).unwrap();
//! println!("{} rows, encoding {}", table.num_rows(), table.encoding);
//! ```

mod error;
pub mod header;
mod reader;
mod types;

pub use error::{DbfError, Result};
pub use reader::{DbfReader, read_dbf, read_dbf_bytes};
pub use types::{DbfField, DbfFieldType, DbfReaderOptions, DbfTable, DbfValue};
