//! CLI library components for the booking report tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
