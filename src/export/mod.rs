//! Export module for dfmis-periods
//!
//! Writes a budget schedule in one of several formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable array of periods
//! - YAML: human-readable array of periods

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use crate::config::settings::OutputFormat;
use crate::display::format_schedule;
use crate::error::{PeriodError, PeriodResult};
use crate::models::PeriodAllocation;

pub use self::csv::export_schedule_csv;
pub use self::json::export_schedule_json;
pub use self::yaml::export_schedule_yaml;

/// Write a schedule in the requested format
pub fn write_schedule<W: Write>(
    rows: &[PeriodAllocation],
    format: OutputFormat,
    currency_symbol: &str,
    writer: &mut W,
) -> PeriodResult<()> {
    match format {
        OutputFormat::Table => writeln!(writer, "{}", format_schedule(rows, currency_symbol))
            .map_err(|e| PeriodError::Export(e.to_string())),
        OutputFormat::Csv => export_schedule_csv(rows, writer),
        OutputFormat::Json => export_schedule_json(rows, writer),
        OutputFormat::Yaml => export_schedule_yaml(rows, writer),
    }
}
