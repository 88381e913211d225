pub mod delimited;
pub mod sheet;

pub use delimited::read_csv_table;
pub use sheet::read_sheet_table;

use tada_model::{BookingTable, FileFormat, Result};

/// Decode an uploaded file's bytes into a [`BookingTable`] using the format
/// hint derived from its name.
///
/// This is the one place encoding handling happens; the aggregation
/// operations downstream can assume a well-formed table.
pub fn decode_table(bytes: &[u8], file_name: &str) -> Result<BookingTable> {
    match FileFormat::from_file_name(file_name)? {
        FileFormat::DelimitedText => read_csv_table(bytes),
        FileFormat::Spreadsheet => read_sheet_table(bytes),
    }
}
