//! Budget period generation
//!
//! Partitions a project date range into monthly, quarterly or annual
//! sub-periods. Periods are ordered, gap-free and non-overlapping; the last
//! one is clipped to the range end.
//!
//! When the range falls inside a single bucket the one period returned is the
//! range itself. Otherwise the first period is widened back to the start of
//! its bucket, so every period of a multi-bucket schedule begins on a calendar
//! boundary.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::settings::Settings;
use crate::error::{PeriodError, PeriodResult};
use crate::models::{parse_date, BudgetPeriod, Granularity, PeriodAllocation};

/// Generate the periods covering `start..=end`
///
/// Dates are `YYYY-MM-DD` strings. Unparseable dates or an end before the
/// start yield an empty list.
///
/// # Examples
/// ```
/// use dfmis_periods::models::Granularity;
/// use dfmis_periods::services::period::generate_budget_periods;
///
/// let periods = generate_budget_periods("2024-01-01", "2024-05-15", Granularity::Quarterly);
/// assert_eq!(periods.len(), 2);
/// assert_eq!(periods[1].to_string(), "2024-04-01..2024-05-15");
/// ```
pub fn generate_budget_periods(
    start: &str,
    end: &str,
    granularity: Granularity,
) -> Vec<BudgetPeriod> {
    generate_checked(start, end, granularity).unwrap_or_default()
}

/// Generate the periods covering `start..=end`, reporting why input was rejected
pub fn generate_checked(
    start: &str,
    end: &str,
    granularity: Granularity,
) -> PeriodResult<Vec<BudgetPeriod>> {
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;

    if end_date < start_date {
        return Err(PeriodError::inverted_range(start.trim(), end.trim()));
    }

    Ok(generate_between(start_date, end_date, granularity))
}

/// Generate the periods covering `start..=end` for already-parsed dates
pub fn generate_between(
    start: NaiveDate,
    end: NaiveDate,
    granularity: Granularity,
) -> Vec<BudgetPeriod> {
    if end < start {
        return Vec::new();
    }

    if granularity.same_bucket(start, end) {
        return vec![BudgetPeriod { start, end }];
    }

    let mut periods = Vec::new();
    let mut cursor = granularity.bucket_start(start).unwrap_or(start);

    loop {
        let nominal_end = granularity.bucket_end(cursor).unwrap_or(end);
        let period_end = nominal_end.min(end);
        periods.push(BudgetPeriod {
            start: cursor,
            end: period_end,
        });

        // succ_opt is None only at the last representable date
        match period_end.succ_opt() {
            Some(next) if next <= end => cursor = next,
            _ => break,
        }
    }

    periods
}

/// Settings-aware period generation
pub struct PeriodService<'a> {
    settings: &'a Settings,
}

impl<'a> PeriodService<'a> {
    /// Create a new period service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Parse a granularity name, falling back to the configured default
    pub fn granularity_or_default(&self, name: Option<&str>) -> PeriodResult<Granularity> {
        match name {
            Some(s) => s.parse(),
            None => Ok(self.settings.default_granularity),
        }
    }

    /// Generate periods for a range, surfacing invalid input as an error
    pub fn generate(
        &self,
        start: &str,
        end: &str,
        granularity: Option<Granularity>,
    ) -> PeriodResult<Vec<BudgetPeriod>> {
        let granularity = granularity.unwrap_or(self.settings.default_granularity);

        match generate_checked(start, end, granularity) {
            Ok(periods) => {
                debug!(
                    start,
                    end,
                    %granularity,
                    count = periods.len(),
                    "generated budget periods"
                );
                Ok(periods)
            }
            Err(e) => {
                debug!(start, end, %granularity, error = %e, "rejected period range");
                Err(e)
            }
        }
    }

    /// Generate a labelled schedule with no amounts attached
    ///
    /// Each row's day count covers only the project range, so a first period
    /// widened back to its bucket start still counts from `start`.
    pub fn schedule(
        &self,
        start: &str,
        end: &str,
        granularity: Option<Granularity>,
    ) -> PeriodResult<Vec<PeriodAllocation>> {
        let granularity = granularity.unwrap_or(self.settings.default_granularity);
        let periods = self.generate(start, end, Some(granularity))?;
        let project_start = parse_date(start)?;

        Ok(periods
            .into_iter()
            .map(|p| {
                PeriodAllocation::unfunded(p, p.label(granularity)).within_project(project_start)
            })
            .collect())
    }
}
