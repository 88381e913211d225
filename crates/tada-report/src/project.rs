#![deny(unsafe_code)]

use tada_model::{BookingTable, RETAINED_COLUMNS, ReportError, Result};

/// Project a booking table down to the retained columns, in allow-list
/// order.
///
/// Pure and idempotent: projecting an already-reduced table returns the same
/// table. Fails with [`ReportError::MissingColumn`] before touching any data
/// if a required column is absent.
pub fn project(table: &BookingTable) -> Result<BookingTable> {
    let mut indices = Vec::with_capacity(RETAINED_COLUMNS.len());
    for column in RETAINED_COLUMNS {
        let index = table
            .column_index(column)
            .ok_or_else(|| ReportError::MissingColumn {
                column: column.to_string(),
            })?;
        indices.push(index);
    }
    let mut reduced = BookingTable::new(RETAINED_COLUMNS.iter().map(|c| (*c).to_string()).collect());
    for row in &table.rows {
        reduced.push_row(
            indices
                .iter()
                .map(|&index| row.get(index).cloned().unwrap_or_default())
                .collect(),
        );
    }
    Ok(reduced)
}
