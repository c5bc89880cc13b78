//! Period CLI commands
//!
//! `generate` prints the periods covering a date range; `allocate` also
//! splits a budget total across them; `status` reports how far a project and
//! its current period have progressed.

use std::io::Write;

use clap::Args;

use crate::config::settings::{OutputFormat, Settings};
use crate::error::{PeriodError, PeriodResult};
use crate::export::write_schedule;
use crate::models::{parse_date, AllocationMethod, BudgetPeriod, Money, PeriodStatus};
use crate::services::{AllocationService, PeriodService};

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project start date (YYYY-MM-DD)
    pub start: String,

    /// Project end date (YYYY-MM-DD, inclusive)
    pub end: String,

    /// Period granularity: monthly, quarterly or annual
    #[arg(short, long)]
    pub granularity: Option<String>,

    /// Output format: table, csv, json or yaml
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for `allocate`
#[derive(Args, Debug)]
pub struct AllocateArgs {
    /// Project start date (YYYY-MM-DD)
    pub start: String,

    /// Project end date (YYYY-MM-DD, inclusive)
    pub end: String,

    /// Total budget (e.g., "250000" or "250,000.50")
    pub amount: String,

    /// Period granularity: monthly, quarterly or annual
    #[arg(short, long)]
    pub granularity: Option<String>,

    /// Allocation method: even or prorated
    #[arg(short, long)]
    pub method: Option<String>,

    /// Output format: table, csv, json or yaml
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for `status`
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Project start date (YYYY-MM-DD)
    pub start: String,

    /// Project end date (YYYY-MM-DD, inclusive)
    pub end: String,

    /// Period granularity: monthly, quarterly or annual
    #[arg(short, long)]
    pub granularity: Option<String>,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub on: Option<String>,
}

fn output_format(settings: &Settings, format: Option<&str>) -> PeriodResult<OutputFormat> {
    match format {
        Some(f) => f.parse(),
        None => Ok(settings.output_format),
    }
}

/// Handle `generate`
pub fn handle_generate_command<W: Write>(
    settings: &Settings,
    args: GenerateArgs,
    writer: &mut W,
) -> PeriodResult<()> {
    let service = PeriodService::new(settings);
    let granularity = service.granularity_or_default(args.granularity.as_deref())?;
    let format = output_format(settings, args.format.as_deref())?;

    let rows = service.schedule(&args.start, &args.end, Some(granularity))?;
    write_schedule(&rows, format, &settings.currency_symbol, writer)
}

/// Handle `allocate`
pub fn handle_allocate_command<W: Write>(
    settings: &Settings,
    args: AllocateArgs,
    writer: &mut W,
) -> PeriodResult<()> {
    let period_service = PeriodService::new(settings);
    let granularity = period_service.granularity_or_default(args.granularity.as_deref())?;
    let format = output_format(settings, args.format.as_deref())?;

    let total = Money::parse(&args.amount).map_err(|e| PeriodError::Validation(e.to_string()))?;
    let method = args
        .method
        .as_deref()
        .map(str::parse::<AllocationMethod>)
        .transpose()?;

    let periods = period_service.generate(&args.start, &args.end, Some(granularity))?;
    let project_start = parse_date(&args.start)?;
    let rows = AllocationService::new(settings).allocate(
        total,
        &periods,
        project_start,
        granularity,
        method,
    )?;

    write_schedule(&rows, format, &settings.currency_symbol, writer)
}

/// Handle `status`
pub fn handle_status_command<W: Write>(
    settings: &Settings,
    args: StatusArgs,
    writer: &mut W,
) -> PeriodResult<()> {
    let service = PeriodService::new(settings);
    let granularity = service.granularity_or_default(args.granularity.as_deref())?;
    let today = match args.on.as_deref() {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };

    let periods = service.generate(&args.start, &args.end, Some(granularity))?;
    let project = BudgetPeriod::new(parse_date(&args.start)?, parse_date(&args.end)?)?;

    writeln!(
        writer,
        "Project {}: {}, {:.1}% elapsed",
        project,
        project.status(today),
        project.progress(today)
    )?;

    match periods.iter().find(|p| p.status(today) == PeriodStatus::Current) {
        Some(current) => {
            // progress within the part of the period the project covers
            let covered = BudgetPeriod::new(current.start.max(project.start), current.end)?;
            writeln!(
                writer,
                "Current period: {} ({}), {:.1}% elapsed",
                current.label(granularity),
                current,
                covered.progress(today)
            )?;
        }
        None => writeln!(writer, "Current period: none")?,
    }

    let remaining = periods
        .iter()
        .filter(|p| p.status(today) == PeriodStatus::Upcoming)
        .count();
    writeln!(writer, "Upcoming periods: {}", remaining)?;

    Ok(())
}
