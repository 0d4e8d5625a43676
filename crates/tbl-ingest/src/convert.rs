//! Applying a conversion plan to records.

use indexmap::IndexMap;
use tbl_model::{
    ConversionPlan, ConversionPolicy, FieldType, NumberParse, Record, Value, format_number,
};

use crate::error::{IngestError, Result};
use crate::infer::parse_number;

/// What a conversion pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Records visited; zero when the plan was empty.
    pub records: usize,
    /// Per field, how many values failed numeric conversion.
    pub unparsed: IndexMap<String, usize>,
}

impl ConversionSummary {
    pub fn unparsed_total(&self) -> usize {
        self.unparsed.values().sum()
    }
}

/// Convert every planned field of every record, in place.
///
/// An empty plan returns immediately without touching any record. Under
/// [`ConversionPolicy::Lenient`] values that fail numeric conversion become
/// [`Value::NotANumber`] and are counted; under
/// [`ConversionPolicy::Strict`] the first such value aborts the pass.
pub fn apply_conversion_plan(
    records: &mut [Record],
    plan: &ConversionPlan,
    policy: ConversionPolicy,
) -> Result<ConversionSummary> {
    let mut summary = ConversionSummary::default();
    if plan.is_empty() {
        return Ok(summary);
    }

    for (row, record) in records.iter_mut().enumerate() {
        for (field, target) in plan.iter() {
            let Some(value) = record.get_mut(field) else {
                continue;
            };
            let converted = convert_value(value, target);
            if let Value::NotANumber(raw) = &converted
                && !value.is_numeric()
            {
                if policy == ConversionPolicy::Strict {
                    return Err(IngestError::InvalidNumber {
                        field: field.to_string(),
                        row,
                        value: raw.clone(),
                    });
                }
                *summary.unparsed.entry(field.to_string()).or_default() += 1;
            }
            *value = converted;
        }
        summary.records += 1;
    }

    for (field, count) in &summary.unparsed {
        tracing::warn!(field = %field, count, "values could not be read as numbers");
    }

    Ok(summary)
}

/// Converted form of `value` for `target`.
pub fn convert_value(value: &Value, target: FieldType) -> Value {
    match target {
        FieldType::String => to_text(value),
        FieldType::Number => to_number(value),
    }
}

fn to_text(value: &Value) -> Value {
    match value {
        Value::Text(_) => value.clone(),
        Value::Number(v) => Value::Text(format_number(*v)),
        Value::NotANumber(_) => Value::text("NaN"),
        Value::Missing => Value::Text(String::new()),
    }
}

/// Text that does not parse, blank text included, keeps its raw form.
fn to_number(value: &Value) -> Value {
    match value {
        Value::Text(text) => match parse_number(text) {
            NumberParse::Parsed(v) => Value::Number(v),
            NumberParse::NotANumber => Value::NotANumber(text.clone()),
        },
        Value::Number(_) | Value::NotANumber(_) | Value::Missing => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn plan(pairs: &[(&str, FieldType)]) -> ConversionPlan {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_number_conversion() {
        let mut records = vec![
            record(&[("ID", Value::text("001")), ("POP", Value::text("1,234"))]),
            record(&[("ID", Value::text("002")), ("POP", Value::text("56"))]),
        ];
        let summary = apply_conversion_plan(
            &mut records,
            &plan(&[("ID", FieldType::Number), ("POP", FieldType::Number)]),
            ConversionPolicy::Lenient,
        )
        .unwrap();

        assert_eq!(summary.records, 2);
        assert_eq!(summary.unparsed_total(), 0);
        assert_eq!(records[0]["ID"], Value::Number(1.0));
        assert_eq!(records[0]["POP"], Value::Number(1234.0));
        assert_eq!(records[1]["POP"], Value::Number(56.0));
    }

    #[test]
    fn test_unparseable_values_are_kept() {
        let mut records = vec![
            record(&[("POP", Value::text("10"))]),
            record(&[("POP", Value::text("n/a"))]),
            record(&[("POP", Value::text(""))]),
        ];
        let summary = apply_conversion_plan(
            &mut records,
            &plan(&[("POP", FieldType::Number)]),
            ConversionPolicy::Lenient,
        )
        .unwrap();

        assert_eq!(records[1]["POP"], Value::NotANumber("n/a".into()));
        assert_eq!(records[2]["POP"], Value::NotANumber(String::new()));
        assert_eq!(summary.unparsed.get("POP"), Some(&2));
    }

    #[test]
    fn test_strict_policy_aborts() {
        let mut records = vec![
            record(&[("POP", Value::text("10"))]),
            record(&[("POP", Value::text("ten"))]),
        ];
        let err = apply_conversion_plan(
            &mut records,
            &plan(&[("POP", FieldType::Number)]),
            ConversionPolicy::Strict,
        )
        .unwrap_err();

        match err {
            IngestError::InvalidNumber { field, row, value } => {
                assert_eq!(field, "POP");
                assert_eq!(row, 1);
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_string_conversion() {
        let mut records = vec![record(&[
            ("A", Value::Number(1234.0)),
            ("B", Value::Number(0.5)),
            ("C", Value::Missing),
            ("D", Value::text("kept")),
        ])];
        apply_conversion_plan(
            &mut records,
            &plan(&[
                ("A", FieldType::String),
                ("B", FieldType::String),
                ("C", FieldType::String),
                ("D", FieldType::String),
            ]),
            ConversionPolicy::Lenient,
        )
        .unwrap();

        assert_eq!(records[0]["A"], Value::text("1234"));
        assert_eq!(records[0]["B"], Value::text("0.5"));
        assert_eq!(records[0]["C"], Value::text(""));
        assert_eq!(records[0]["D"], Value::text("kept"));
    }

    #[test]
    fn test_empty_plan_is_noop() {
        let original = vec![
            record(&[("A", Value::text("001")), ("B", Value::Number(2.0))]),
            record(&[("A", Value::text("x")), ("B", Value::Missing)]),
        ];
        let mut records = original.clone();
        let summary =
            apply_conversion_plan(&mut records, &ConversionPlan::new(), ConversionPolicy::Strict)
                .unwrap();

        assert_eq!(summary.records, 0);
        assert_eq!(records, original);
    }

    #[test]
    fn test_unplanned_and_absent_fields_untouched() {
        let mut records = vec![record(&[("A", Value::text("1")), ("B", Value::text("2"))])];
        apply_conversion_plan(
            &mut records,
            &plan(&[("A", FieldType::Number), ("Z", FieldType::Number)]),
            ConversionPolicy::Lenient,
        )
        .unwrap();

        assert_eq!(records[0]["A"], Value::Number(1.0));
        assert_eq!(records[0]["B"], Value::text("2"));
        assert!(!records[0].contains_key("Z"));
    }

    #[test]
    fn test_blank_cells_are_not_a_number() {
        assert_eq!(
            convert_value(&Value::text("  "), FieldType::Number),
            Value::NotANumber("  ".into())
        );

        let mut records = vec![record(&[("POP", Value::text(""))])];
        let err = apply_conversion_plan(
            &mut records,
            &plan(&[("POP", FieldType::Number)]),
            ConversionPolicy::Strict,
        )
        .unwrap_err();
        assert!(matches!(err, IngestError::InvalidNumber { row: 0, .. }));
    }

    #[test]
    fn test_numeric_values_pass_through_number_target() {
        assert_eq!(
            convert_value(&Value::Number(3.0), FieldType::Number),
            Value::Number(3.0)
        );
        assert_eq!(
            convert_value(&Value::NotANumber("x".into()), FieldType::String),
            Value::text("NaN")
        );
    }
}
