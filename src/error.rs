//! Custom error types for dfmis-periods
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for period generation and allocation
#[derive(Error, Debug)]
pub enum PeriodError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for inputs such as amounts
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date string that is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// End date earlier than start date
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: String, end: String },

    /// Unknown granularity name
    #[error("Invalid granularity '{0}': expected monthly, quarterly or annual")]
    InvalidGranularity(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PeriodError {
    /// Create an inverted-range error
    pub fn inverted_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::InvalidDateRange {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PeriodError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PeriodError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for dfmis-periods operations
pub type PeriodResult<T> = Result<T, PeriodError>;
