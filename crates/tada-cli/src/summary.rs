use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tada_model::{Distribution, FileReport};

use crate::types::ReportResult;

pub fn print_summary(result: &ReportResult) {
    for outcome in &result.outcomes {
        println!();
        println!("File: {}", outcome.file_name);
        match outcome.report() {
            Some(report) => print_file_report(report),
            None => {
                if let Some(notice) = outcome.notice() {
                    eprintln!("  {notice}");
                }
            }
        }
    }
    if !result.chart_files.is_empty() {
        println!();
        println!("Charts:");
        for path in &result.chart_files {
            println!("- {}", path.display());
        }
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_file_report(report: &FileReport) {
    println!("Most frequent values:");
    println!("{}", mode_table(report));
    print_distribution("Booking channel mix", &report.channel);
    print_distribution("Guest nationality mix", &report.nationality);
    print_distribution("Top room types booked", &report.top_rooms);
}

fn mode_table(report: &FileReport) -> Table {
    let mut table = Table::new();
    table.set_header(
        report
            .mode_table
            .column_names()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_summary_table_style(&mut table);
    for row in report.mode_table.display_rows() {
        table.add_row(row.into_iter().map(|cell| {
            if cell.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(cell)
            }
        }));
    }
    table
}

fn print_distribution(title: &str, distribution: &Distribution) {
    println!("{title}:");
    if distribution.is_empty() {
        println!("  (no data)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Value"), header_cell("Percentage")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    // Descending percentage is a display choice; the model keeps the
    // first-encounter order `top_n` tie-breaking relies on.
    let mut entries: Vec<_> = distribution.iter().collect();
    entries.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
    });
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.value),
            Cell::new(format!("{:.1}%", entry.percentage)),
        ]);
    }
    println!("{table}");
}

/// Serialize the outcomes for the `--json` output surface.
pub fn render_json(result: &ReportResult) -> anyhow::Result<String> {
    let files: Vec<serde_json::Value> = result
        .outcomes
        .iter()
        .map(|outcome| {
            serde_json::json!({
                "file_name": outcome.file_name,
                "report": outcome.report(),
                "error": outcome.notice(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&files)?)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
