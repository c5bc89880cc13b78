//! JSON Export functionality
//!
//! Writes a schedule as a pretty-printed array of
//! `{ "start", "end", "label", "days", "amount"? }` objects.

use std::io::Write;

use crate::error::{PeriodError, PeriodResult};
use crate::models::PeriodAllocation;

/// Export a schedule to JSON
pub fn export_schedule_json<W: Write>(
    rows: &[PeriodAllocation],
    writer: &mut W,
) -> PeriodResult<()> {
    serde_json::to_writer_pretty(&mut *writer, rows)?;
    writeln!(writer).map_err(|e| PeriodError::Export(e.to_string()))?;
    Ok(())
}
