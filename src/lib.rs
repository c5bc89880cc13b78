//! dfmis-periods - budget period generation for development-finance planning
//!
//! Partitions a project's date range into monthly, quarterly or annual
//! budget periods and spreads project totals across them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Periods, granularities, money and schedule rows
//! - `services`: Period generation and allocation
//! - `display`: Terminal tables
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers for the `dfmis-periods` binary
//! - `observability`: Logging setup
//!
//! # Example
//!
//! ```
//! use dfmis_periods::models::Granularity;
//! use dfmis_periods::generate_budget_periods;
//!
//! let periods = generate_budget_periods("2024-01-01", "2025-12-31", Granularity::Quarterly);
//! assert_eq!(periods.len(), 8);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod observability;
pub mod services;

pub use error::{PeriodError, PeriodResult};
pub use services::period::generate_budget_periods;
