//! Integration tests for the report command.

use std::fs;
use std::path::{Path, PathBuf};

use tada_cli::cli::ReportArgs;
use tada_cli::commands::run_report;
use tada_cli::summary::render_json;

const EXPORT: &str = "\
Booking reference,Guest first name,Channel name,Guest country,Room types
B-001,Kiri,Booking.com,NZ,Double
B-002,Sam,Direct,NZ,Double
";

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("tada_cli_report_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn temp_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reports_on_a_csv_export() {
    let dir = temp_dir();
    let path = temp_file(&dir, "bookings.csv", EXPORT.as_bytes());
    let args = ReportArgs {
        files: vec![path.clone()],
        charts_dir: None,
        json: false,
    };
    let result = run_report(&args).expect("run report");

    assert!(!result.has_errors);
    assert_eq!(result.outcomes.len(), 1);
    let report = result.outcomes[0].report().expect("report built");
    assert_eq!(report.channel.percentage_of("Direct"), Some(50.0));
    assert_eq!(report.nationality.percentage_of("NZ"), Some(100.0));

    let json = render_json(&result).expect("render json");
    assert!(json.contains("Booking.com"));
    // Guest names never survive projection.
    assert!(!json.contains("Kiri"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn bad_files_fail_individually() {
    let dir = temp_dir();
    let good = temp_file(&dir, "bookings.csv", EXPORT.as_bytes());
    let missing = dir.join("nonexistent.csv");
    let unsupported = temp_file(&dir, "notes.pdf", b"not tabular");

    let args = ReportArgs {
        files: vec![missing.clone(), good.clone(), unsupported.clone()],
        charts_dir: None,
        json: false,
    };
    let result = run_report(&args).expect("run report");

    assert!(result.has_errors);
    assert_eq!(result.outcomes.len(), 3);
    assert!(result.outcomes[0].is_failed());
    assert!(result.outcomes[1].report().is_some());
    assert!(result.outcomes[2].is_failed());
    assert!(
        result.outcomes[2]
            .notice()
            .expect("notice")
            .contains("unsupported file format")
    );

    let _ = fs::remove_dir_all(&dir);
}
