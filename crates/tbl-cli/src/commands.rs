use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use tbl_ingest::import_data_file;
use tbl_model::{ConversionPolicy, DataTable, ImportOptions};

use crate::cli::{ImportArgs, OutputFormatArg};
use crate::render::{render_json, render_table};

/// Import options derived from command line flags.
pub fn import_options(args: &ImportArgs) -> ImportOptions {
    let mut options = ImportOptions::new();
    if let Some(encoding) = &args.encoding {
        options = options.with_encoding(encoding.as_str());
    }
    if !args.field_types.is_empty() {
        options = options.with_field_types(args.field_types.iter().map(String::as_str));
    }
    if args.strict_numbers {
        options = options.with_policy(ConversionPolicy::Strict);
    }
    options
}

pub fn run_import(args: &ImportArgs) -> Result<DataTable> {
    let span = info_span!("tbl_import", file = %args.file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = import_options(args);
    let table = import_data_file(&args.file, &options)
        .with_context(|| format!("import {}", args.file.display()))?;

    for warning in &table.info.warnings {
        warn!(%warning, "import warning");
    }
    info!(
        records = table.len(),
        fields = table.fields.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "import complete"
    );
    Ok(table)
}

/// Output text for the chosen format.
pub fn render_output(table: &DataTable, args: &ImportArgs) -> Result<String> {
    match args.format {
        OutputFormatArg::Table => Ok(render_table(table, args.rows)),
        OutputFormatArg::Json => render_json(table).context("serialize table"),
    }
}
