//! End-to-end report builder tests over decoded uploads.

use tada_model::{ReportError, Upload};
use tada_report::{build_file_report, build_report};

const EXPORT: &str = "\
Booking reference,Guest first name,Guest email,Channel name,Guest country,Room types,Payment total
B-001,Kiri,kiri@example.com,Booking.com,NZ,Double,180.00
B-002,Sam,sam@example.com,Direct,NZ,Double,140.00
";

#[test]
fn two_record_export_matches_expected_products() {
    let table = tada_ingest::read_csv_table(EXPORT.as_bytes()).expect("decode export");
    let report = build_file_report(&table, "bookings.csv").expect("build report");

    assert_eq!(report.channel.percentage_of("Booking.com"), Some(50.0));
    assert_eq!(report.channel.percentage_of("Direct"), Some(50.0));
    assert_eq!(report.nationality.percentage_of("NZ"), Some(100.0));
    assert_eq!(report.top_rooms.percentage_of("Double"), Some(100.0));

    // Two-way channel tie, unique modes elsewhere.
    let rows = report.mode_table.display_rows();
    assert_eq!(
        rows,
        vec![
            vec![
                "Booking.com".to_string(),
                "NZ".to_string(),
                "Double".to_string()
            ],
            vec!["Direct".to_string(), String::new(), String::new()],
        ]
    );
}

#[test]
fn dropped_columns_never_reach_the_outputs() {
    let table = tada_ingest::read_csv_table(EXPORT.as_bytes()).expect("decode export");
    let report = build_file_report(&table, "bookings.csv").expect("build report");
    let json = serde_json::to_string(&report).expect("serialize report");
    assert!(!json.contains("example.com"));
    assert!(!json.contains("Payment"));
    assert!(!json.contains("Kiri"));
}

#[test]
fn missing_required_column_fails_without_partial_output() {
    let table =
        tada_ingest::read_csv_table(b"Channel name,Room types\nDirect,Double\n").expect("decode");
    let error = build_file_report(&table, "bookings.csv").unwrap_err();
    match error {
        ReportError::MissingColumn { column } => assert_eq!(column, "Guest country"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn one_bad_file_does_not_abort_the_batch() {
    let uploads = vec![
        Upload::new("good.csv", EXPORT.as_bytes().to_vec()),
        Upload::new("broken.csv", vec![0xff, 0xfe, 0x00]),
        Upload::new("notes.pdf", b"not tabular".to_vec()),
        Upload::new("also-good.csv", EXPORT.as_bytes().to_vec()),
    ];
    let outcomes = build_report(&uploads);

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes[0].report().is_some());
    assert!(outcomes[3].report().is_some());
    assert_eq!(
        outcomes[1].notice().as_deref(),
        Some("please upload a valid file")
    );
    assert!(matches!(
        outcomes[2].result,
        Err(ReportError::UnsupportedFormat { .. })
    ));
    // Outcomes stay in input order.
    assert_eq!(outcomes[2].file_name, "notes.pdf");
}
