//! Period granularity
//!
//! A granularity names the calendar bucket a budget period snaps to: the
//! month, the quarter (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec) or the year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PeriodError;

/// Bucketing mode for period generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Calendar months
    Monthly,
    /// Calendar quarters
    #[default]
    Quarterly,
    /// Calendar years
    Annual,
}

impl Granularity {
    /// All granularities, shortest first
    pub const ALL: [Granularity; 3] = [Self::Monthly, Self::Quarterly, Self::Annual];

    /// Nominal length of one bucket in months
    pub const fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Annual => 12,
        }
    }

    /// First month (1-12) of the bucket containing `month`
    fn first_month_of_bucket(&self, month: u32) -> u32 {
        match self {
            Self::Monthly => month,
            Self::Quarterly => (month - 1) / 3 * 3 + 1,
            Self::Annual => 1,
        }
    }

    /// First day of the bucket containing `date`
    pub fn bucket_start(&self, date: NaiveDate) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(date.year(), self.first_month_of_bucket(date.month()), 1)
    }

    /// Last day of the bucket containing `date`
    pub fn bucket_end(&self, date: NaiveDate) -> Option<NaiveDate> {
        let last_month = self.first_month_of_bucket(date.month()) + self.months() - 1;
        last_day_of_month(date.year(), last_month)
    }

    /// Whether two dates fall in the same bucket
    pub fn same_bucket(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a.year() == b.year()
            && self.first_month_of_bucket(a.month()) == self.first_month_of_bucket(b.month())
    }

    /// Human-friendly name of the bucket containing `date`
    ///
    /// Monthly buckets read "January 2024", quarters "Q1 2024" and years "2024".
    pub fn bucket_label(&self, date: NaiveDate) -> String {
        match self {
            Self::Monthly => date.format("%B %Y").to_string(),
            Self::Quarterly => format!("Q{} {}", (date.month() - 1) / 3 + 1, date.year()),
            Self::Annual => date.year().to_string(),
        }
    }
}

/// Whether `year` is a leap year in the proleptic Gregorian calendar
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, accounting for leap years
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Last calendar day of a month
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Quarterly => write!(f, "quarterly"),
            Self::Annual => write!(f, "annual"),
        }
    }
}

impl FromStr for Granularity {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "quarterly" | "quarter" | "q" => Ok(Self::Quarterly),
            "annual" | "annually" | "yearly" | "year" | "y" => Ok(Self::Annual),
            _ => Err(PeriodError::InvalidGranularity(s.to_string())),
        }
    }
}
