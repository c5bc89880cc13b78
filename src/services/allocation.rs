//! Budget allocation service
//!
//! Spreads a project total over generated periods. Amounts are whole cents
//! and always sum to the total exactly.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::settings::Settings;
use crate::error::{PeriodError, PeriodResult};
use crate::models::{AllocationMethod, BudgetPeriod, Granularity, Money, PeriodAllocation};

/// Service for splitting totals across budget periods
pub struct AllocationService<'a> {
    settings: &'a Settings,
}

impl<'a> AllocationService<'a> {
    /// Create a new allocation service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Assign each period its share of `total`
    ///
    /// `project_start` is the first day of the project. The first generated
    /// period may begin earlier; only project days count toward its weight.
    /// Uses the configured method when `method` is `None`.
    pub fn allocate(
        &self,
        total: Money,
        periods: &[BudgetPeriod],
        project_start: NaiveDate,
        granularity: Granularity,
        method: Option<AllocationMethod>,
    ) -> PeriodResult<Vec<PeriodAllocation>> {
        if total.is_negative() {
            return Err(PeriodError::Validation(format!(
                "Budget total cannot be negative: {}",
                total
            )));
        }

        let method = method.unwrap_or(self.settings.allocation_method);
        let weights: Vec<i64> = match method {
            AllocationMethod::Even => vec![1; periods.len()],
            AllocationMethod::Prorated => periods
                .iter()
                .map(|p| p.days_from(project_start))
                .collect(),
        };

        let shares = split_by_weights(total.cents(), &weights);
        debug!(
            total = total.cents(),
            %method,
            periods = periods.len(),
            "allocated budget across periods"
        );

        Ok(periods
            .iter()
            .zip(shares)
            .map(|(p, cents)| {
                PeriodAllocation::funded(*p, p.label(granularity), Money::from_cents(cents))
                    .within_project(project_start)
            })
            .collect())
    }
}

/// Split `total` into integer shares proportional to `weights`
///
/// Each share is floored; leftover units go to the largest fractional
/// remainders, earlier entries winning ties. `total` must be non-negative and
/// every weight positive.
pub fn split_by_weights(total: i64, weights: &[i64]) -> Vec<i64> {
    let weight_sum: i128 = weights.iter().map(|w| *w as i128).sum();
    if weights.is_empty() || weight_sum <= 0 {
        return vec![0; weights.len()];
    }

    let total = total as i128;
    let mut shares = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());

    for (i, w) in weights.iter().enumerate() {
        let scaled = total * *w as i128;
        shares.push((scaled / weight_sum) as i64);
        remainders.push((scaled % weight_sum, i));
    }

    let assigned: i128 = shares.iter().map(|s| *s as i128).sum();
    let leftover = (total - assigned).max(0) as usize;

    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for (_, i) in remainders.into_iter().take(leftover) {
        shares[i] += 1;
    }

    shares
}
