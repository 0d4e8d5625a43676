//! Terminal and JSON rendering of imported tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tbl_model::{DataTable, FieldType, SourceFormat, Value};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// One line per field: inferred type, applied conversion and value counts.
pub fn field_summary(table: &DataTable) -> Table {
    let mut summary = Table::new();
    summary.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Converted"),
        header_cell("Missing"),
        header_cell("Not a number"),
    ]);
    apply_table_style(&mut summary);
    align_column(&mut summary, 3, CellAlignment::Right);
    align_column(&mut summary, 4, CellAlignment::Right);

    for field in &table.fields {
        let values = || table.records.iter().filter_map(|record| record.get(field));
        let missing = values().filter(|value| value.is_missing()).count();
        let unparsed = values()
            .filter(|value| matches!(value, Value::NotANumber(_)))
            .count();
        let converted = table
            .info
            .conversions
            .get(field)
            .map_or_else(|| dim_cell("-"), |target| Cell::new(format!("to {target}")));

        summary.add_row(vec![
            Cell::new(field).add_attribute(Attribute::Bold),
            type_cell(table.field_type(field)),
            converted,
            count_cell(missing, Color::DarkGrey),
            count_cell(unparsed, Color::Yellow),
        ]);
    }
    summary
}

/// The first `limit` records, one column per field.
pub fn record_preview(table: &DataTable, limit: usize) -> Table {
    let mut preview = Table::new();
    preview.set_header(table.fields.iter().map(|field| header_cell(field)));
    apply_table_style(&mut preview);

    for (index, field) in table.fields.iter().enumerate() {
        if table.field_type(field) == Some(FieldType::Number) {
            align_column(&mut preview, index, CellAlignment::Right);
        }
    }

    for record in table.records.iter().take(limit) {
        preview.add_row(
            table
                .fields
                .iter()
                .map(|field| value_cell(record.get(field).unwrap_or(&Value::Missing))),
        );
    }
    preview
}

/// Source line, summary, preview and warnings, ready to print.
pub fn render_table(table: &DataTable, limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Source: {}\n", table.info.source));
    out.push_str(&format!("Format: {}\n", format_label(table)));
    out.push_str(&format!(
        "Records: {}  Fields: {}\n",
        table.len(),
        table.fields.len()
    ));
    out.push_str(&format!("{}\n", field_summary(table)));
    if limit > 0 && !table.is_empty() {
        out.push_str(&format!("{}\n", record_preview(table, limit)));
        if table.len() > limit {
            out.push_str(&format!("... {} more records\n", table.len() - limit));
        }
    }
    for warning in &table.info.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }
    out
}

/// Pretty-printed JSON of the whole table.
pub fn render_json(table: &DataTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}

fn format_label(table: &DataTable) -> String {
    match (table.info.format, table.info.delimiter) {
        (SourceFormat::Dbf, _) => "dBase".to_string(),
        (SourceFormat::Delimited, Some(delimiter)) => {
            format!("delimited text ({})", delimiter_name(delimiter))
        }
        (SourceFormat::Delimited, None) => "delimited text".to_string(),
    }
}

fn delimiter_name(delimiter: char) -> &'static str {
    match delimiter {
        '|' => "pipe",
        '\t' => "tab",
        ',' => "comma",
        _ => "other",
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}

fn type_cell(field_type: Option<FieldType>) -> Cell {
    match field_type {
        Some(FieldType::Number) => Cell::new("number").fg(Color::Cyan),
        Some(FieldType::String) => Cell::new("string").fg(Color::Green),
        None => dim_cell("empty"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell("0")
    } else {
        Cell::new(count).fg(color)
    }
}

fn value_cell(value: &Value) -> Cell {
    match value {
        Value::Missing => dim_cell(""),
        Value::NotANumber(raw) => Cell::new(raw).fg(Color::Yellow),
        Value::Text(_) | Value::Number(_) => Cell::new(value),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
