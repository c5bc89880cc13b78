//! Display formatting for terminal output

pub mod schedule;

pub use schedule::format_schedule;
