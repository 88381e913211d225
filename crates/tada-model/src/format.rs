#![deny(unsafe_code)]

use crate::error::{ReportError, Result};

/// Format hint derived from the uploaded file's name.
///
/// A name containing `csv` is treated as delimited text and one containing
/// `xls` as a spreadsheet binary; nothing else is recognized. An
/// unrecognized name is an explicit [`ReportError::UnsupportedFormat`], not
/// a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FileFormat {
    DelimitedText,
    Spreadsheet,
}

impl FileFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let lowered = file_name.to_ascii_lowercase();
        if lowered.contains("csv") {
            Ok(Self::DelimitedText)
        } else if lowered.contains("xls") {
            Ok(Self::Spreadsheet)
        } else {
            Err(ReportError::UnsupportedFormat {
                file_name: file_name.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_csv_and_xls_names() {
        assert_eq!(
            FileFormat::from_file_name("reservations.csv").unwrap(),
            FileFormat::DelimitedText
        );
        assert_eq!(
            FileFormat::from_file_name("Export-2024.XLSX").unwrap(),
            FileFormat::Spreadsheet
        );
        // The hint is a substring check, matching the original upload handler.
        assert_eq!(
            FileFormat::from_file_name("my-csv-dump.txt").unwrap(),
            FileFormat::DelimitedText
        );
    }

    #[test]
    fn unrecognized_name_is_an_error() {
        let error = FileFormat::from_file_name("notes.pdf").unwrap_err();
        assert!(matches!(error, ReportError::UnsupportedFormat { .. }));
    }
}
