#![deny(unsafe_code)]

use crate::error::ReportError;

/// One category of a [`Distribution`] with its share of the total.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DistributionEntry {
    pub value: String,
    pub percentage: f64,
}

/// Mapping from a column's distinct values to their percentage share.
///
/// Entries are kept in first-encounter order of the value in the source
/// column. That ordering is what makes `top_n` tie-breaking stable; any
/// percentage-descending ordering for display is a presentation concern.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Distribution {
    pub entries: Vec<DistributionEntry>,
}

impl Distribution {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn percentage_of(&self, value: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.percentage)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DistributionEntry> {
        self.entries.iter()
    }
}

/// The tied modes of one column, most frequent value(s) first-encountered
/// first. Empty when every cell of the column was missing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModeColumn {
    pub column: String,
    pub values: Vec<String>,
}

/// Statistical mode per retained column, computed independently per column.
///
/// The natural shape is column -> ordered tied values; [`ModeTable::display_rows`]
/// flattens it into rows for tabular rendering, padding shorter columns with
/// empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModeTable {
    pub columns: Vec<ModeColumn>,
}

impl ModeTable {
    /// Number of display rows: the largest tie-group across columns.
    pub fn height(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.values.len())
            .max()
            .unwrap_or(0)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.column.as_str())
    }

    /// Flatten into display rows; row `i` holds the `i`-th tied mode of each
    /// column, or an empty cell where the column has fewer ties.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        (0..self.height())
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.values.get(row).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// The four data products derived from one uploaded file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FileReport {
    pub file_name: String,
    pub mode_table: ModeTable,
    pub channel: Distribution,
    pub nationality: Distribution,
    pub top_rooms: Distribution,
}

/// Result of processing one file of a multi-file upload.
///
/// Files are processed independently; one file's failure never aborts the
/// others, so a batch comes back as a `Vec<FileOutcome>` in input order.
#[derive(Debug)]
pub struct FileOutcome {
    pub file_name: String,
    pub result: Result<FileReport, ReportError>,
}

impl FileOutcome {
    pub fn new(file_name: impl Into<String>, result: Result<FileReport, ReportError>) -> Self {
        Self {
            file_name: file_name.into(),
            result,
        }
    }

    pub fn report(&self) -> Option<&FileReport> {
        self.result.as_ref().ok()
    }

    pub fn is_failed(&self) -> bool {
        self.result.is_err()
    }

    /// The single user-facing message shown for a failed file.
    ///
    /// Decode failures collapse to a generic upload notice; column and
    /// format errors keep their specific message.
    pub fn notice(&self) -> Option<String> {
        match &self.result {
            Ok(_) => None,
            Err(ReportError::Decode { .. }) => Some("please upload a valid file".to_string()),
            Err(error) => Some(error.to_string()),
        }
    }
}

/// Raw material handed over by the upload boundary for one file.
///
/// The boundary also supplies an upload timestamp; the report core never
/// consumes it, so it is not modeled here.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}
