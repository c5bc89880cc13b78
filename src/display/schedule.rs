//! Schedule display formatting
//!
//! Renders a budget schedule as a terminal table.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::models::{Money, PeriodAllocation};

/// Format a schedule as a table
///
/// An Amount column and a total row are added when any row carries an amount.
pub fn format_schedule(rows: &[PeriodAllocation], currency_symbol: &str) -> String {
    if rows.is_empty() {
        return "No periods in range.".to_string();
    }

    let funded = rows.iter().any(|r| r.amount.is_some());

    let mut builder = Builder::default();
    let mut header: Vec<String> = ["Period", "Start", "End", "Days"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    if funded {
        header.push("Amount".to_string());
    }
    builder.push_record(header);

    for row in rows {
        let mut record = vec![
            row.label.clone(),
            row.period.start.to_string(),
            row.period.end.to_string(),
            row.days.to_string(),
        ];
        if funded {
            record.push(
                row.amount
                    .map(|a| a.format_with_symbol(currency_symbol))
                    .unwrap_or_default(),
            );
        }
        builder.push_record(record);
    }

    if funded {
        let total: Money = rows.iter().filter_map(|r| r.amount).sum();
        let days: i64 = rows.iter().map(|r| r.days).sum();
        builder.push_record(vec![
            "Total".to_string(),
            String::new(),
            String::new(),
            days.to_string(),
            total.format_with_symbol(currency_symbol),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::psql())
        .modify(Columns::new(3..), Alignment::right());
    table.to_string()
}
