#![deny(unsafe_code)]

/// Column whose values name the booking channel the reservation came through.
pub const CHANNEL_COLUMN: &str = "Channel name";
/// Column whose values name the guest's country of origin.
pub const COUNTRY_COLUMN: &str = "Guest country";
/// Column whose values name the booked room type.
pub const ROOM_TYPES_COLUMN: &str = "Room types";

/// The allow-list of columns the report is built from, in output order.
///
/// Everything else in a reservations export (guest PII, payment amounts,
/// dates) is dropped by projection and must never reach any output.
pub const RETAINED_COLUMNS: [&str; 3] = [CHANNEL_COLUMN, COUNTRY_COLUMN, ROOM_TYPES_COLUMN];

/// A decoded reservations export: one header row plus data rows.
///
/// Invariant: every row has exactly `headers.len()` cells; decoding pads or
/// truncates ragged rows. Cells are trimmed text and an empty string marks a
/// missing value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl BookingTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Push a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Iterate the cells of one column. `None` if the column is absent.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(index).map(String::as_str).unwrap_or("")),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
