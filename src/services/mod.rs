//! Service layer for dfmis-periods
//!
//! Period generation and budget allocation on top of the data models.

pub mod allocation;
pub mod period;

pub use allocation::AllocationService;
pub use period::{generate_between, generate_budget_periods, generate_checked, PeriodService};
