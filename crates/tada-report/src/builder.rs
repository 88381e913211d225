#![deny(unsafe_code)]

use tada_ingest::decode_table;
use tada_model::{
    BookingTable, CHANNEL_COLUMN, COUNTRY_COLUMN, FileOutcome, FileReport, ROOM_TYPES_COLUMN,
    Result, Upload,
};

use crate::distribution::{distribution, top_n};
use crate::mode::mode_table;
use crate::project::project;

/// How many room types the room-type distribution is trimmed to.
pub const TOP_ROOM_TYPES: usize = 10;

/// Derive the four data products for one decoded booking table.
///
/// Pure: projection first (which validates the required columns), then the
/// three distributions and the mode table over the reduced table.
pub fn build_file_report(table: &BookingTable, file_name: &str) -> Result<FileReport> {
    let reduced = project(table)?;
    let channel = distribution(&reduced, CHANNEL_COLUMN)?;
    let nationality = distribution(&reduced, COUNTRY_COLUMN)?;
    let rooms = distribution(&reduced, ROOM_TYPES_COLUMN)?;
    tracing::info!(
        file = %file_name,
        records = reduced.row_count(),
        channels = channel.len(),
        nationalities = nationality.len(),
        room_types = rooms.len(),
        "built booking report"
    );
    Ok(FileReport {
        file_name: file_name.to_string(),
        mode_table: mode_table(&reduced),
        channel,
        nationality,
        top_rooms: top_n(&rooms, TOP_ROOM_TYPES),
    })
}

/// Decode one upload and derive its report, capturing any failure in the
/// returned outcome instead of propagating it.
pub fn build_upload(upload: &Upload) -> FileOutcome {
    let result = decode_table(&upload.bytes, &upload.file_name)
        .and_then(|table| build_file_report(&table, &upload.file_name));
    if let Err(error) = &result {
        tracing::warn!(file = %upload.file_name, %error, "upload failed");
    }
    FileOutcome::new(upload.file_name.clone(), result)
}

/// Decode and report on a batch of uploads.
///
/// Each file is handled independently and outcomes come back in input
/// order; a failed decode or a missing column is recorded against its file
/// and never aborts the rest of the batch.
pub fn build_report(uploads: &[Upload]) -> Vec<FileOutcome> {
    uploads.iter().map(build_upload).collect()
}
