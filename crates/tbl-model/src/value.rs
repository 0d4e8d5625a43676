//! Cell values and field types.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Target representation for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    String,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of coercing text to a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberParse {
    Parsed(f64),
    NotANumber,
}

/// A single cell.
///
/// `Text` is the only textual variant. `Number` and `NotANumber` are both
/// numeric: the latter is what a failed numeric conversion leaves behind,
/// keeping the original text so the failure can be inspected later.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    NotANumber(String),
    Missing,
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_) | Self::NotANumber(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Native type of the value, if it has one.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Self::Text(_) => Some(FieldType::String),
            Self::Number(_) | Self::NotANumber(_) => Some(FieldType::Number),
            Self::Missing => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(v) => f.write_str(&format_number(*v)),
            Self::NotANumber(_) => f.write_str("NaN"),
            Self::Missing => Ok(()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(v) if v.is_finite() => serializer.serialize_f64(*v),
            Self::Number(_) | Self::NotANumber(_) | Self::Missing => serializer.serialize_none(),
        }
    }
}

/// Default decimal text for a number: `1234`, `1.5`, `NaN`, `Infinity`.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, use exponent form.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        let sign = if v < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if v == 0.0 {
        "0".to_string()
    } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
        // Exponent always carries a sign: `1e+21`, `1.5e-7`.
        let text = format!("{v:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        format!("{v}")
    }
}
