//! Chart rendering for booking report distributions.
//!
//! Renders a [`Distribution`] as a pie or bar chart using the [`plotters`]
//! bitmap backend. Charts are saved as PNG files with fixed 1200x800
//! resolution.

use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::{
    BitMapBackend, ChartBuilder, Color, IntoDrawingArea, IntoFont, IntoSegmentedCoord, Pie,
    RGBColor, Rectangle, WHITE,
};
use thiserror::Error;

use tada_model::{Distribution, FileReport};

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("failed to save chart to file: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, ChartError>;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;

/// Slice colors, cycled when a distribution has more categories.
const PALETTE: [RGBColor; 8] = [
    RGBColor(237, 109, 71),
    RGBColor(66, 133, 244),
    RGBColor(52, 168, 83),
    RGBColor(251, 188, 5),
    RGBColor(171, 71, 188),
    RGBColor(0, 172, 193),
    RGBColor(255, 112, 67),
    RGBColor(121, 134, 203),
];

fn slice_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Render a distribution as a pie chart PNG.
///
/// Each slice is labeled with its value and percentage share. An empty
/// distribution is skipped (nothing to draw is not a failure).
pub fn render_pie(distribution: &Distribution, title: &str, output_path: &Path) -> Result<()> {
    if distribution.is_empty() {
        tracing::debug!(title, "skipping pie chart for empty distribution");
        return Ok(());
    }
    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|error| ChartError::DrawingArea(error.to_string()))?;
    let root = root
        .titled(title, ("sans-serif", 40).into_font())
        .map_err(|error| ChartError::DrawingArea(error.to_string()))?;

    let sizes: Vec<f64> = distribution.iter().map(|entry| entry.percentage).collect();
    let labels: Vec<String> = distribution
        .iter()
        .map(|entry| format!("{} ({:.1}%)", entry.value, entry.percentage))
        .collect();
    let colors: Vec<RGBColor> = (0..sizes.len()).map(slice_color).collect();

    let center = (WIDTH as i32 / 2, 420);
    let radius = 300.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 24).into_font());
    root.draw(&pie)
        .map_err(|error| ChartError::Drawing(error.to_string()))?;
    root.present()
        .map_err(|error| ChartError::Drawing(error.to_string()))?;
    Ok(())
}

/// Render a distribution as a vertical bar chart PNG with a 0-100
/// percentage Y-axis.
pub fn render_bar(distribution: &Distribution, title: &str, output_path: &Path) -> Result<()> {
    if distribution.is_empty() {
        tracing::debug!(title, "skipping bar chart for empty distribution");
        return Ok(());
    }
    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|error| ChartError::DrawingArea(error.to_string()))?;

    let labels: Vec<String> = distribution
        .iter()
        .map(|entry| entry.value.clone())
        .collect();
    let bars = i32::try_from(labels.len()).map_err(|_| {
        ChartError::ChartConfig(format!("too many categories to plot: {}", labels.len()))
    })?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 36).into_font())
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(60)
        .build_cartesian_2d((0..bars).into_segmented(), 0.0..100.0f64)
        .map_err(|error| ChartError::ChartConfig(error.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Percentage")
        .x_labels(labels.len())
        .x_label_formatter(&|coord| match coord {
            SegmentValue::CenterOf(index) => usize::try_from(*index)
                .ok()
                .and_then(|index| labels.get(index).cloned())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(|error| ChartError::ChartConfig(error.to_string()))?;

    chart
        .draw_series(distribution.iter().enumerate().map(|(index, entry)| {
            let left = index as i32;
            Rectangle::new(
                [
                    (SegmentValue::Exact(left), 0.0),
                    (SegmentValue::Exact(left + 1), entry.percentage),
                ],
                slice_color(index).filled(),
            )
        }))
        .map_err(|error| ChartError::Drawing(error.to_string()))?;
    root.present()
        .map_err(|error| ChartError::Drawing(error.to_string()))?;
    Ok(())
}

/// File names the three charts of one report are written under.
pub fn chart_paths(report: &FileReport, dir: &Path) -> [PathBuf; 3] {
    let stem = Path::new(&report.file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    [
        dir.join(format!("{stem}_channel.png")),
        dir.join(format!("{stem}_nationality.png")),
        dir.join(format!("{stem}_rooms.png")),
    ]
}

/// Render the three charts of one report into `dir`.
pub fn render_report_charts(report: &FileReport, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let [channel, nationality, rooms] = chart_paths(report, dir);
    render_pie(&report.channel, "Booking Channels Used By Guests", &channel)?;
    render_pie(&report.nationality, "Nationalities of Guests", &nationality)?;
    render_bar(&report.top_rooms, "Top 10 Room Types Booked", &rooms)?;
    Ok(vec![channel, nationality, rooms])
}
