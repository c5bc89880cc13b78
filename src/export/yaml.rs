//! YAML Export functionality

use std::io::Write;

use crate::error::{PeriodError, PeriodResult};
use crate::models::PeriodAllocation;

/// Export a schedule to YAML, preceded by a short header comment
pub fn export_schedule_yaml<W: Write>(
    rows: &[PeriodAllocation],
    writer: &mut W,
) -> PeriodResult<()> {
    writeln!(writer, "# Budget schedule: {} period(s)", rows.len())
        .map_err(|e| PeriodError::Export(e.to_string()))?;
    writeln!(writer, "# Generated by dfmis-periods {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| PeriodError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, rows).map_err(|e| PeriodError::Export(e.to_string()))?;

    Ok(())
}
