//! Field type inference from a sample record.

use std::sync::LazyLock;

use regex::Regex;
use tbl_model::{ConversionPlan, FieldHints, FieldType, NumberParse, Record, Value};

/// Complete decimal literal, a signed `Infinity`, or an unsigned hex literal.
static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[+-]?(?:(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?|Infinity)|0[xX][0-9a-fA-F]+)$")
        .expect("Invalid numeric literal regex")
});

/// Remove thousands separators.
pub fn clean_number(text: &str) -> String {
    text.replace(',', "")
}

/// True when `text`, minus thousands separators, is a whole numeric literal.
///
/// Empty text, `NaN`, signed hex and values with trailing characters fail.
/// Zero-padded codes such as `001` pass and lose their padding when
/// converted.
pub fn looks_numeric(text: &str) -> bool {
    NUMERIC_LITERAL.is_match(clean_number(text).trim())
}

/// Coerce text to a number after removing thousands separators.
pub fn parse_number(text: &str) -> NumberParse {
    let cleaned = clean_number(text);
    let trimmed = cleaned.trim();
    if !NUMERIC_LITERAL.is_match(trimmed) {
        return NumberParse::NotANumber;
    }
    if let Some(digits) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return NumberParse::Parsed(parse_hex(digits));
    }
    trimmed
        .parse::<f64>()
        .map_or(NumberParse::NotANumber, NumberParse::Parsed)
}

/// Digits already validated as hex; values past `u64` are accumulated as floats.
fn parse_hex(digits: &str) -> f64 {
    u64::from_str_radix(digits, 16).map_or_else(
        |_| {
            digits
                .chars()
                .filter_map(|c| c.to_digit(16))
                .fold(0.0, |acc, d| acc * 16.0 + f64::from(d))
        },
        |v| v as f64,
    )
}

/// Decide which fields need converting, judging by `sample` and `hints`.
///
/// Fields are visited in the sample's own order. Without a hint, text that
/// looks numeric is planned as a number. With a hint, the field is planned
/// only when the sampled value does not already have the hinted type.
pub fn build_conversion_plan(sample: &Record, hints: &FieldHints) -> ConversionPlan {
    let mut plan = ConversionPlan::new();

    for (field, value) in sample {
        let target = match hints.get(field) {
            None => match value {
                Value::Text(text) if looks_numeric(text) => Some(FieldType::Number),
                _ => None,
            },
            Some(FieldType::Number) if !value.is_numeric() => Some(FieldType::Number),
            Some(FieldType::String) if !value.is_text() => Some(FieldType::String),
            Some(_) => None,
        };
        if let Some(target) = target {
            tracing::debug!(field = %field, target = %target, "planned conversion");
            plan.insert(field.as_str(), target);
        }
    }

    plan
}
