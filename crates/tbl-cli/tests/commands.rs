//! Integration tests for the import command.

use std::fs;
use std::path::PathBuf;

use tbl_cli::cli::{ImportArgs, OutputFormatArg};
use tbl_cli::commands::{import_options, render_output, run_import};
use tbl_model::{ConversionPolicy, Value};
use tempfile::TempDir;

fn args(file: PathBuf) -> ImportArgs {
    ImportArgs {
        file,
        field_types: Vec::new(),
        encoding: None,
        strict_numbers: false,
        format: OutputFormatArg::Table,
        rows: 10,
    }
}

#[test]
fn test_import_options_from_flags() {
    let mut import = args(PathBuf::from("a.dbf"));
    import.field_types = vec!["FIPS:str".into(), "+POP".into()];
    import.encoding = Some("latin1".into());
    import.strict_numbers = true;

    let options = import_options(&import);
    assert_eq!(
        options.field_types,
        Some(vec!["FIPS:str".to_string(), "+POP".to_string()])
    );
    assert_eq!(options.encoding.as_deref(), Some("latin1"));
    assert_eq!(options.policy, ConversionPolicy::Strict);

    let defaults = import_options(&args(PathBuf::from("a.csv")));
    assert!(defaults.field_types.is_none());
    assert_eq!(defaults.policy, ConversionPolicy::Lenient);
}

#[test]
fn test_run_import_table_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("counties.txt");
    fs::write(&path, "FIPS|NAME|POP\n01001|Autauga|55347\n01003|Baldwin|n/a\n").unwrap();

    let mut import = args(path);
    import.field_types = vec!["FIPS:str".into()];
    let table = run_import(&import).unwrap();
    assert_eq!(table.get(0, "FIPS"), Some(&Value::text("01001")));
    assert_eq!(table.get(1, "POP"), Some(&Value::NotANumber("n/a".into())));

    let output = render_output(&table, &import).unwrap();
    assert!(output.contains("delimited text (pipe)"));
    assert!(output.contains("Records: 2  Fields: 3"));
    assert!(output.contains("warning: 1 value(s) in field POP could not be read as numbers"));
}

#[test]
fn test_run_import_json_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.csv");
    fs::write(&path, "A,B\n1,x\n").unwrap();

    let mut import = args(path);
    import.format = OutputFormatArg::Json;
    let table = run_import(&import).unwrap();
    let output = render_output(&table, &import).unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["fields"], serde_json::json!(["A", "B"]));
    assert_eq!(json["records"][0]["A"], serde_json::json!(1.0));
}

#[test]
fn test_run_import_failure_has_context() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let err = run_import(&args(path.clone())).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with(&format!("import {}", path.display())));
    assert!(message.contains("unable to import file"));
}

#[test]
fn test_strict_numbers_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.csv");
    fs::write(&path, "N\n1\nx\n").unwrap();

    let mut import = args(path);
    import.strict_numbers = true;
    let err = run_import(&import).unwrap_err();
    assert!(format!("{err:#}").contains("invalid number 'x' in field N"));
}
