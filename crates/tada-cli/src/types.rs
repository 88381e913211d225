use std::path::PathBuf;

use tada_model::FileOutcome;

#[derive(Debug)]
pub struct ReportResult {
    pub outcomes: Vec<FileOutcome>,
    pub chart_files: Vec<PathBuf>,
    /// Non-fatal errors raised while rendering charts.
    pub errors: Vec<String>,
    pub has_errors: bool,
}
