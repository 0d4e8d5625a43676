//! Type hints embedded in header names.
//!
//! Two forms are recognised:
//!
//! - a suffix, `FIPS:str` or `POP:num` (matched by first letter, any case)
//! - a leading plus, `+POP`, which always means number

use tbl_model::{FieldHints, FieldType};

/// Header names with hints stripped, plus any hint tokens that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeaders {
    pub names: Vec<String>,
    /// Raw tokens whose `:` suffix was not a recognised type.
    pub invalid_hints: Vec<String>,
}

/// Interpret a hint suffix: `n...` is number, `s...` is string.
pub fn parse_field_type(hint: &str) -> Option<FieldType> {
    match hint.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('n') => Some(FieldType::Number),
        Some('s') => Some(FieldType::String),
        _ => None,
    }
}

/// Strip type hints from raw header tokens, recording them in `hints`.
///
/// A later hint for the same name replaces an earlier one. Unrecognised
/// suffixes are logged and returned in [`ParsedHeaders::invalid_hints`];
/// the field keeps its name and gets no hint.
pub fn parse_field_headers<S: AsRef<str>>(raw: &[S], hints: &mut FieldHints) -> ParsedHeaders {
    let mut parsed = ParsedHeaders {
        names: Vec::with_capacity(raw.len()),
        invalid_hints: Vec::new(),
    };

    for token in raw {
        let token = token.as_ref();
        let (name, field_type) = if let Some((name, rest)) = token.split_once(':') {
            let hint = rest.split(':').next().unwrap_or_default();
            let field_type = parse_field_type(hint);
            if field_type.is_none() {
                tracing::warn!(token, "Invalid type hint (expected :str or :num)");
                parsed.invalid_hints.push(token.to_string());
            }
            (name, field_type)
        } else if let Some(name) = token.strip_prefix('+') {
            (name, Some(FieldType::Number))
        } else {
            (token, None)
        };

        if let Some(field_type) = field_type {
            hints.insert(name, field_type);
        }
        parsed.names.push(name.to_string());
    }

    parsed
}

/// Header names with any type hints removed.
pub fn remove_type_hints<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    parse_field_headers(raw, &mut FieldHints::new()).names
}
