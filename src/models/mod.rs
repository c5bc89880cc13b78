//! Core data models for dfmis-periods
//!
//! Budget periods, the granularity they are bucketed by, money amounts and
//! the schedule rows that pair a period with its share of a project total.

pub mod allocation;
pub mod granularity;
pub mod money;
pub mod period;

pub use allocation::{AllocationMethod, PeriodAllocation};
pub use granularity::Granularity;
pub use money::Money;
pub use period::{parse_date, BudgetPeriod, PeriodStatus};
