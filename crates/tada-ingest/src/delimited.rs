#![deny(unsafe_code)]

use csv::ReaderBuilder;

use tada_model::{BookingTable, ReportError, Result};

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Decode a delimited-text upload into a [`BookingTable`].
///
/// The payload must be UTF-8; the first non-blank row is the header row and
/// blank rows are skipped throughout. Any csv or encoding error becomes a
/// [`ReportError::Decode`].
pub fn read_csv_table(bytes: &[u8]) -> Result<BookingTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| ReportError::decode(error.to_string()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    let Some(header_row) = raw_rows.first() else {
        return Ok(BookingTable::new(Vec::new()));
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    let mut table = BookingTable::new(headers);
    for row in raw_rows.into_iter().skip(1) {
        table.push_row(row);
    }
    tracing::debug!(
        columns = table.headers.len(),
        rows = table.row_count(),
        "decoded csv upload"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_rows() {
        let table =
            read_csv_table(b"Channel name,Guest country\nBooking.com,NZ\nDirect,AU\n").unwrap();
        assert_eq!(table.headers, vec!["Channel name", "Guest country"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Direct".to_string(), "AU".to_string()]);
    }

    #[test]
    fn strips_bom_and_whitespace_from_headers() {
        let table = read_csv_table("\u{feff} Channel  name ,Guest country\n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Channel name", "Guest country"]);
        assert!(table.is_empty());
    }

    #[test]
    fn skips_blank_rows_and_pads_short_ones() {
        let table = read_csv_table(b"A,B\n,\n1\n").unwrap();
        assert_eq!(table.rows, vec![vec!["1".to_string(), String::new()]]);
    }

    #[test]
    fn empty_payload_yields_empty_table() {
        let table = read_csv_table(b"").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let error = read_csv_table(&[0x41, 0x2c, 0x42, 0x0a, 0xff, 0xfe, 0x2c, 0x31]).unwrap_err();
        assert!(matches!(error, ReportError::Decode { .. }));
    }
}
