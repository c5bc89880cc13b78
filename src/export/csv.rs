//! CSV Export functionality
//!
//! One row per period: label, start, end, length in days, and the allocated
//! amount when the schedule is funded.

use std::io::Write;

use crate::error::{PeriodError, PeriodResult};
use crate::models::PeriodAllocation;

/// Export a schedule to CSV
pub fn export_schedule_csv<W: Write>(
    rows: &[PeriodAllocation],
    writer: &mut W,
) -> PeriodResult<()> {
    let funded = rows.iter().any(|r| r.amount.is_some());
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Label", "Start", "End", "Days"];
    if funded {
        header.push("Amount");
    }
    csv_writer
        .write_record(&header)
        .map_err(|e| PeriodError::Export(e.to_string()))?;

    for row in rows {
        let mut record = vec![
            row.label.clone(),
            row.period.start.to_string(),
            row.period.end.to_string(),
            row.days.to_string(),
        ];
        if funded {
            record.push(row.amount.map(|a| a.to_string()).unwrap_or_default());
        }
        csv_writer
            .write_record(&record)
            .map_err(|e| PeriodError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PeriodError::Export(e.to_string()))?;

    Ok(())
}
