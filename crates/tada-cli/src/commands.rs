use std::fs;

use anyhow::Result;
use comfy_table::Table;
use tracing::{debug, info_span};

use tada_charts::render_report_charts;
use tada_model::{FileOutcome, RETAINED_COLUMNS, ReportError, Upload};
use tada_report::build_upload;

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;
use crate::types::ReportResult;

/// List the allow-listed columns the report is built from.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column"]);
    apply_table_style(&mut table);
    for column in RETAINED_COLUMNS {
        table.add_row(vec![column]);
    }
    println!("{table}");
    Ok(())
}

/// Process each input file independently and collect the outcomes in input
/// order. An unreadable or malformed file is recorded against its name and
/// never aborts the other files.
pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let mut outcomes = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file_span = info_span!("file", name = %file_name);
        let _guard = file_span.enter();
        let outcome = match fs::read(path) {
            Ok(bytes) => build_upload(&Upload::new(file_name, bytes)),
            Err(error) => FileOutcome::new(file_name, Err(ReportError::io(path, error))),
        };
        outcomes.push(outcome);
    }

    let mut chart_files = Vec::new();
    let mut errors = Vec::new();
    if let Some(dir) = &args.charts_dir {
        for outcome in &outcomes {
            let Some(report) = outcome.report() else {
                continue;
            };
            match render_report_charts(report, dir) {
                Ok(paths) => {
                    debug!(file = %outcome.file_name, charts = paths.len(), "rendered charts");
                    chart_files.extend(paths);
                }
                Err(error) => {
                    errors.push(format!("charts for {}: {error}", outcome.file_name));
                }
            }
        }
    }

    let has_errors = outcomes.iter().any(FileOutcome::is_failed) || !errors.is_empty();
    Ok(ReportResult {
        outcomes,
        chart_files,
        errors,
        has_errors,
    })
}
