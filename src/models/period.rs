//! Budget period representation
//!
//! A budget period is an inclusive `start..=end` date range, one reporting
//! sub-interval of a project timeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::granularity::Granularity;
use crate::error::{PeriodError, PeriodResult};

/// Date format used for parsing and serializing period boundaries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One sub-period of a project timeline (both ends inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Where a period sits relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    Past,
    Current,
    Upcoming,
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Past => write!(f, "past"),
            Self::Current => write!(f, "current"),
            Self::Upcoming => write!(f, "upcoming"),
        }
    }
}

impl BudgetPeriod {
    /// Create a period, rejecting `end < start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> PeriodResult<Self> {
        if end < start {
            return Err(PeriodError::inverted_range(
                start.format(DATE_FORMAT).to_string(),
                end.format(DATE_FORMAT).to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Parse a `start..end` range such as "2024-01-01..2024-03-31"
    pub fn parse(s: &str) -> PeriodResult<Self> {
        let (start, end) = s
            .trim()
            .split_once("..")
            .ok_or_else(|| PeriodError::Validation(format!("Invalid period format: {}", s)))?;
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Days of this period on or after `from`, counting both ends
    ///
    /// A schedule's first period may start before the project does; this is
    /// the part of it the project actually covers.
    pub fn days_from(&self, from: NaiveDate) -> i64 {
        if from > self.end {
            return 0;
        }
        (self.end - self.start.max(from)).num_days() + 1
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Status of this period as of `today`
    pub fn status(&self, today: NaiveDate) -> PeriodStatus {
        if self.end < today {
            PeriodStatus::Past
        } else if self.start > today {
            PeriodStatus::Upcoming
        } else {
            PeriodStatus::Current
        }
    }

    /// Percentage of the period elapsed as of `today`
    ///
    /// Zero on the start day, 100 on the end day. A single-day period is
    /// complete once it is current.
    pub fn progress(&self, today: NaiveDate) -> f64 {
        match self.status(today) {
            PeriodStatus::Upcoming => 0.0,
            PeriodStatus::Past => 100.0,
            PeriodStatus::Current => {
                let span = (self.end - self.start).num_days();
                if span == 0 {
                    return 100.0;
                }
                let elapsed = (today - self.start).num_days();
                (elapsed as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
            }
        }
    }

    /// Friendly name for this period under a granularity ("Q1 2024", ...)
    ///
    /// Partial periods carry the name of the bucket they start in.
    pub fn label(&self, granularity: Granularity) -> String {
        granularity.bucket_label(self.start)
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date
///
/// Surrounding whitespace is ignored. Anything else, including single-digit
/// months or days and impossible dates such as 2023-02-29, is rejected.
pub fn parse_date(s: &str) -> PeriodResult<NaiveDate> {
    let trimmed = s.trim();
    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(PeriodError::InvalidDate(s.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| PeriodError::InvalidDate(s.to_string()))
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

impl Ord for BudgetPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for BudgetPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn q1_2024() -> BudgetPeriod {
        BudgetPeriod::new(date(2024, 1, 1), date(2024, 3, 31)).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted() {
        let err = BudgetPeriod::new(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, PeriodError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_days() {
        assert_eq!(q1_2024().days(), 91);
        let single = BudgetPeriod::new(date(2024, 1, 15), date(2024, 1, 15)).unwrap();
        assert_eq!(single.days(), 1);
    }

    #[test]
    fn test_days_from_project_start() {
        let q1 = q1_2024();
        assert_eq!(q1.days_from(date(2024, 3, 20)), 12);
        assert_eq!(q1.days_from(date(2023, 6, 1)), 91);
        assert_eq!(q1.days_from(date(2024, 3, 31)), 1);
        assert_eq!(q1.days_from(date(2024, 4, 1)), 0);
    }

    #[test]
    fn test_contains() {
        let q1 = q1_2024();
        assert!(q1.contains(date(2024, 1, 1)));
        assert!(q1.contains(date(2024, 3, 31)));
        assert!(!q1.contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_status_and_progress() {
        let q1 = q1_2024();
        assert_eq!(q1.status(date(2023, 12, 31)), PeriodStatus::Upcoming);
        assert_eq!(q1.status(date(2024, 2, 1)), PeriodStatus::Current);
        assert_eq!(q1.status(date(2024, 4, 1)), PeriodStatus::Past);

        assert_eq!(q1.progress(date(2023, 12, 31)), 0.0);
        assert_eq!(q1.progress(date(2024, 1, 1)), 0.0);
        assert_eq!(q1.progress(date(2024, 3, 31)), 100.0);
        assert_eq!(q1.progress(date(2025, 1, 1)), 100.0);
        // 45 of 90 elapsed days
        assert_eq!(q1.progress(date(2024, 2, 15)), 50.0);

        let single = BudgetPeriod::new(date(2024, 1, 15), date(2024, 1, 15)).unwrap();
        assert_eq!(single.progress(date(2024, 1, 15)), 100.0);
    }

    #[test]
    fn test_label() {
        let q1 = q1_2024();
        assert_eq!(q1.label(Granularity::Quarterly), "Q1 2024");
        assert_eq!(q1.label(Granularity::Monthly), "January 2024");

        let partial = BudgetPeriod::new(date(2024, 4, 1), date(2024, 5, 15)).unwrap();
        assert_eq!(partial.label(Granularity::Quarterly), "Q2 2024");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date(" 2024-01-15 ").unwrap(), date(2024, 1, 15));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-1-5").is_err());
        assert!(parse_date("invalid").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(BudgetPeriod::parse("2024-01-01..2024-03-31").unwrap(), q1_2024());
        assert!(BudgetPeriod::parse("2024-01-01").is_err());
        assert!(BudgetPeriod::parse("2024-03-31..2024-01-01").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(q1_2024().to_string(), "2024-01-01..2024-03-31");
    }

    #[test]
    fn test_ordering() {
        let a = q1_2024();
        let b = BudgetPeriod::new(date(2024, 4, 1), date(2024, 6, 30)).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&q1_2024()).unwrap();
        assert_eq!(json, r#"{"start":"2024-01-01","end":"2024-03-31"}"#);
        let back: BudgetPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q1_2024());
    }
}
