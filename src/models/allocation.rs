//! Budget allocation across periods
//!
//! A `PeriodAllocation` is one budget-entry row: a generated period, its
//! friendly label, the number of project days it covers and the share of the
//! project total assigned to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use super::period::BudgetPeriod;
use crate::error::PeriodError;

/// How a project total is split across periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AllocationMethod {
    /// Equal share per period
    #[default]
    Even,
    /// Share proportional to the number of days in each period
    Prorated,
}

impl fmt::Display for AllocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => write!(f, "even"),
            Self::Prorated => write!(f, "prorated"),
        }
    }
}

impl FromStr for AllocationMethod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "even" | "equal" => Ok(Self::Even),
            "prorated" | "prorata" | "days" => Ok(Self::Prorated),
            _ => Err(PeriodError::Validation(format!(
                "Unknown allocation method '{}': expected even or prorated",
                s
            ))),
        }
    }
}

/// A single row of a budget schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAllocation {
    #[serde(flatten)]
    pub period: BudgetPeriod,
    pub label: String,
    /// Days of the period inside the project range
    pub days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

impl PeriodAllocation {
    /// A schedule row without an amount
    pub fn unfunded(period: BudgetPeriod, label: impl Into<String>) -> Self {
        Self {
            period,
            label: label.into(),
            days: period.days(),
            amount: None,
        }
    }

    /// A schedule row carrying its share of the total
    pub fn funded(period: BudgetPeriod, label: impl Into<String>, amount: Money) -> Self {
        Self {
            period,
            label: label.into(),
            days: period.days(),
            amount: Some(amount),
        }
    }

    /// Count only the days on or after the project start
    pub fn within_project(mut self, project_start: NaiveDate) -> Self {
        self.days = self.period.days_from(project_start);
        self
    }
}
