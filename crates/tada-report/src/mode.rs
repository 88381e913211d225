#![deny(unsafe_code)]

use std::collections::HashMap;

use tada_model::{BookingTable, ModeColumn, ModeTable};

fn column_modes(values: impl Iterator<Item = impl AsRef<str>>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        let value = value.as_ref();
        if value.is_empty() {
            continue;
        }
        match counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                order.push(value.to_string());
                counts.insert(value.to_string(), 1);
            }
        }
    }
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    order
        .into_iter()
        .filter(|value| counts.get(value).copied() == Some(max))
        .collect()
}

/// Statistical mode of every column of the table, computed independently per
/// column (not a cross-column joint mode).
///
/// Ties are all kept, in first-encounter order; missing cells are ignored
/// when counting, so an all-missing column has no modes.
pub fn mode_table(table: &BookingTable) -> ModeTable {
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| ModeColumn {
            column: header.clone(),
            values: column_modes(
                table
                    .rows
                    .iter()
                    .map(move |row| row.get(index).map(String::as_str).unwrap_or("")),
            ),
        })
        .collect();
    ModeTable { columns }
}
