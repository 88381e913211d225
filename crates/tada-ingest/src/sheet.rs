#![deny(unsafe_code)]

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use tada_model::{BookingTable, ReportError, Result};

use crate::delimited::{normalize_cell, normalize_header};

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => normalize_cell(value),
        Data::Int(value) => value.to_string(),
        // Spreadsheet cells hold all numbers as floats; render whole numbers
        // without a trailing fraction so "2" and 2.0 count as one category.
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", *value as i64)
        }
        other => normalize_cell(&other.to_string()),
    }
}

/// Decode a spreadsheet upload (xls/xlsx) into a [`BookingTable`].
///
/// Reads the first worksheet; the first row is the header row. Any workbook
/// parse failure becomes a [`ReportError::Decode`].
pub fn read_sheet_table(bytes: &[u8]) -> Result<BookingTable> {
    let cursor = Cursor::new(bytes);
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|error| ReportError::decode(error.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ReportError::decode("workbook has no worksheets"))?
        .map_err(|error| ReportError::decode(error.to_string()))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(BookingTable::new(Vec::new()));
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell_text(cell)))
        .collect();
    let mut table = BookingTable::new(headers);
    for row in rows {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        if cells.iter().all(|value| value.is_empty()) {
            continue;
        }
        table.push_row(cells);
    }
    tracing::debug!(
        columns = table.headers.len(),
        rows = table.row_count(),
        "decoded spreadsheet upload"
    );
    Ok(table)
}
