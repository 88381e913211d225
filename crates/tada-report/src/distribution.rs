#![deny(unsafe_code)]

use std::cmp::Ordering;
use std::collections::HashMap;

use tada_model::{BookingTable, Distribution, DistributionEntry, ReportError, Result};

/// Percentage share of each distinct value in the named column.
///
/// Missing (empty) cells are excluded from both the counts and the
/// denominator, so percentages over a non-empty column sum to 100 within
/// floating-point tolerance. Entries come back in first-encounter order; an
/// empty table yields an empty distribution, not an error.
pub fn distribution(table: &BookingTable, column: &str) -> Result<Distribution> {
    let values = table
        .column_values(column)
        .ok_or_else(|| ReportError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;
    for value in values {
        if value.is_empty() {
            continue;
        }
        total += 1;
        match counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                order.push(value.to_string());
                counts.insert(value.to_string(), 1);
            }
        }
    }
    if total == 0 {
        return Ok(Distribution::default());
    }
    let entries = order
        .into_iter()
        .map(|value| {
            let count = counts.get(&value).copied().unwrap_or(0);
            DistributionEntry {
                percentage: count as f64 / total as f64 * 100.0,
                value,
            }
        })
        .collect();
    Ok(Distribution { entries })
}

/// At most `n` entries by descending percentage.
///
/// The sort is stable, so ties keep the first-encounter order the
/// distribution was built with.
pub fn top_n(distribution: &Distribution, n: usize) -> Distribution {
    let mut entries = distribution.entries.clone();
    entries.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
    });
    entries.truncate(n);
    Distribution { entries }
}
