pub mod builder;
pub mod distribution;
pub mod mode;
pub mod project;

pub use builder::{TOP_ROOM_TYPES, build_file_report, build_report, build_upload};
pub use distribution::{distribution, top_n};
pub use mode::mode_table;
pub use project::project;
