//! Integration tests for the table model.

use serde_json::json;
use tbl_model::{
    ConversionPlan, DataTable, FieldHints, FieldType, ImportInfo, ImportWarning, Record,
    SourceFormat, Value,
};

fn record(pairs: &[(&str, Value)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

fn sample_table() -> DataTable {
    let records = vec![
        record(&[
            ("FIPS", Value::text("01001")),
            ("POP", Value::Missing),
            ("AREA", Value::Number(1.5)),
        ]),
        record(&[
            ("FIPS", Value::text("01003")),
            ("POP", Value::NotANumber("n/a".into())),
            ("AREA", Value::Number(f64::INFINITY)),
        ]),
    ];
    let mut info = ImportInfo::new("counties.csv", SourceFormat::Delimited);
    info.delimiter = Some(',');
    info.conversions.insert("POP".into(), FieldType::Number);
    info.warnings.push(ImportWarning::UnparsedNumbers {
        field: "POP".into(),
        count: 1,
    });
    DataTable::new(vec!["FIPS".into(), "POP".into(), "AREA".into()], records, info)
}

#[test]
fn field_types_skip_missing_values() {
    let table = sample_table();
    assert_eq!(table.field_type("FIPS"), Some(FieldType::String));
    assert_eq!(table.field_type("POP"), Some(FieldType::Number));
    assert_eq!(table.field_type("AREA"), Some(FieldType::Number));
    assert_eq!(table.field_type("NONE"), None);
}

#[test]
fn table_json_shape() {
    let json = serde_json::to_value(sample_table()).unwrap();
    assert_eq!(
        json,
        json!({
            "fields": ["FIPS", "POP", "AREA"],
            "records": [
                {"FIPS": "01001", "POP": null, "AREA": 1.5},
                {"FIPS": "01003", "POP": null, "AREA": null}
            ],
            "info": {
                "source": "counties.csv",
                "format": "delimited",
                "delimiter": ",",
                "conversions": {"POP": "number"},
                "warnings": [{"kind": "unparsed_numbers", "field": "POP", "count": 1}]
            }
        })
    );
}

#[test]
fn hints_and_plans_collect_from_pairs() {
    let hints: FieldHints = [("B", FieldType::Number), ("A", FieldType::String)]
        .into_iter()
        .collect();
    assert!(hints.contains("A"));
    assert_eq!(hints.iter().count(), 2);

    let plan: ConversionPlan = [("B", FieldType::Number), ("A", FieldType::String)]
        .into_iter()
        .collect();
    let order: Vec<&str> = plan.iter().map(|(field, _)| field).collect();
    assert_eq!(order, vec!["B", "A"]);
}

#[test]
fn display_renders_cells_as_text() {
    assert_eq!(Value::Number(1234.0).to_string(), "1234");
    assert_eq!(Value::NotANumber("abc".into()).to_string(), "NaN");
    assert_eq!(Value::Missing.to_string(), "");
    assert_eq!(Value::text("x").to_string(), "x");
}
