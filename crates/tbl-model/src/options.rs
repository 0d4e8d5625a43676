//! Configuration options for table import.

use serde::{Deserialize, Serialize};

/// What to do with values that fail numeric conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConversionPolicy {
    /// Keep the failure as a not-a-number value and carry on.
    #[default]
    Lenient,
    /// Abort the import at the first value that does not parse.
    Strict,
}

/// Options for a single import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Text encoding label for dBase tables (e.g. `latin1`, `utf-8`).
    ///
    /// Delimited text is always read as UTF-8.
    pub encoding: Option<String>,

    /// Header-style type hints (`FIPS:str`, `+POP`) that override the
    /// hints found in the header row.
    pub field_types: Option<Vec<String>>,

    /// Handling of values that do not parse as numbers.
    pub policy: ConversionPolicy,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    #[must_use]
    pub fn with_field_types<I, S>(mut self, field_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_types = Some(field_types.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ConversionPolicy) -> Self {
        self.policy = policy;
        self
    }
}
