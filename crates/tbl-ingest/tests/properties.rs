//! Property tests for the import heuristics.

use proptest::prelude::*;
use tbl_ingest::{
    apply_conversion_plan, guess_delimiter, import_delimited_text, looks_numeric, parse_number,
};
use tbl_model::{ConversionPlan, ConversionPolicy, ImportOptions, NumberParse, Record, Value};

fn field_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][A-Z0-9_]{0,7}", 2..6)
}

proptest! {
    #[test]
    fn finite_numbers_look_numeric(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let text = v.to_string();
        prop_assert!(looks_numeric(&text));
        prop_assert_eq!(parse_number(&text), NumberParse::Parsed(v));
    }

    #[test]
    fn trailing_letters_are_not_numeric(v in -1.0e9f64..1.0e9, suffix in "[a-wyzA-WYZ]{1,3}") {
        let text = format!("{v}{suffix}");
        prop_assert!(!looks_numeric(&text));
        prop_assert_eq!(parse_number(&text), NumberParse::NotANumber);
    }

    #[test]
    fn grouped_integers_parse(n in 0u64..1_000_000_000) {
        let digits = n.to_string();
        let mut grouped = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        prop_assert_eq!(parse_number(&grouped), NumberParse::Parsed(n as f64));
    }

    #[test]
    fn delimiter_of_header_line_is_found(
        names in field_names(),
        delim in prop::sample::select(vec!['|', '\t', ',']),
    ) {
        let content = format!("{}\n1{delim}2\n", names.join(&delim.to_string()));
        prop_assert_eq!(guess_delimiter(&content), delim);
    }

    #[test]
    fn pipe_beats_other_delimiters(names in field_names(), other in prop::sample::select(vec!['\t', ','])) {
        let content = format!("{}|EXTRA\n", names.join(&other.to_string()));
        prop_assert_eq!(guess_delimiter(&content), '|');
    }

    #[test]
    fn empty_plan_changes_nothing(cells in prop::collection::vec(".{0,6}", 1..8)) {
        let record: Record = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (format!("F{i}"), Value::text(cell.as_str())))
            .collect();
        let mut records = vec![record.clone(), record.clone()];
        let summary =
            apply_conversion_plan(&mut records, &ConversionPlan::new(), ConversionPolicy::Strict)
                .unwrap();
        prop_assert_eq!(summary.records, 0);
        prop_assert_eq!(&records[0], &record);
        prop_assert_eq!(&records[1], &record);
    }

    #[test]
    fn header_names_survive_import(names in prop::collection::hash_set("[A-Z]{1,6}", 1..6)) {
        let names: Vec<String> = names.into_iter().collect();
        let row = vec!["x"; names.len()].join(",");
        let content = format!("{}\n{row}\n", names.join(","));
        let table = import_delimited_text(&content, &ImportOptions::default()).unwrap();
        prop_assert_eq!(&table.fields, &names);
        prop_assert_eq!(table.len(), 1);
    }
}
