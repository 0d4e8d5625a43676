//! Data model for table import.
//!
//! Values are tagged (`Text`, `Number`, `NotANumber`, `Missing`) so type
//! inference and conversion work on the variant rather than on runtime
//! type checks.

pub mod hints;
pub mod options;
pub mod table;
pub mod value;

pub use hints::{ConversionPlan, FieldHints};
pub use options::{ConversionPolicy, ImportOptions};
pub use table::{DataTable, ImportInfo, ImportWarning, Record, SourceFormat};
pub use value::{FieldType, NumberParse, Value, format_number};
