pub mod error;
pub mod format;
pub mod report;
pub mod table;

pub use error::{ReportError, Result};
pub use format::FileFormat;
pub use report::{
    Distribution, DistributionEntry, FileOutcome, FileReport, ModeColumn, ModeTable, Upload,
};
pub use table::{
    BookingTable, CHANNEL_COLUMN, COUNTRY_COLUMN, RETAINED_COLUMNS, ROOM_TYPES_COLUMN,
};
