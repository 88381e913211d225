//! Property tests for the aggregation operations.

use proptest::prelude::*;

use tada_model::{BookingTable, RETAINED_COLUMNS};
use tada_report::{distribution, mode_table, project, top_n};

fn category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Booking.com".to_string()),
        Just("Direct".to_string()),
        Just("Expedia".to_string()),
        Just("Agoda".to_string()),
        Just("Walk-in".to_string()),
        // Missing value.
        Just(String::new()),
    ]
}

fn booking_table() -> impl Strategy<Value = BookingTable> {
    prop::collection::vec((category(), category(), category()), 0..64).prop_map(|rows| {
        let mut table =
            BookingTable::new(RETAINED_COLUMNS.iter().map(|c| (*c).to_string()).collect());
        for (channel, country, room) in rows {
            table.push_row(vec![channel, country, room]);
        }
        table
    })
}

proptest! {
    #[test]
    fn percentages_sum_to_100_over_non_missing_columns(table in booking_table(), column in 0usize..3) {
        let dist = distribution(&table, RETAINED_COLUMNS[column]).unwrap();
        let sum: f64 = dist.iter().map(|entry| entry.percentage).sum();
        if dist.is_empty() {
            prop_assert!(table.column_values(RETAINED_COLUMNS[column]).unwrap().all(str::is_empty));
        } else {
            prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {sum}");
        }
    }

    #[test]
    fn top_n_is_bounded_and_ordered(table in booking_table(), n in 0usize..8) {
        let dist = distribution(&table, RETAINED_COLUMNS[0]).unwrap();
        let top = top_n(&dist, n);
        prop_assert!(top.len() <= n);
        prop_assert!(top.len() <= dist.len());
        if dist.len() >= n {
            prop_assert_eq!(top.len(), n);
        }
        for pair in top.entries.windows(2) {
            prop_assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn projection_is_idempotent(table in booking_table()) {
        let once = project(&table).unwrap();
        let twice = project(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn modes_carry_the_maximum_count(table in booking_table()) {
        let modes = mode_table(&project(&table).unwrap());
        for column in &modes.columns {
            let values: Vec<&str> = table
                .column_values(&column.column)
                .unwrap()
                .filter(|value| !value.is_empty())
                .collect();
            let count_of = |needle: &str| values.iter().filter(|&&v| v == needle).count();
            let max = values.iter().map(|v| count_of(v)).max().unwrap_or(0);
            prop_assert_eq!(column.values.is_empty(), values.is_empty());
            for mode in &column.values {
                prop_assert_eq!(count_of(mode), max);
            }
        }
    }
}
