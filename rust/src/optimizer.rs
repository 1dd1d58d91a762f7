//! Top-level orchestration: wires C1 through C7 into one pass, plus the
//! pyo3 boundary that parses raw date strings before handing off to the
//! pure engine.

use chrono::{Datelike, NaiveDate};
use pyo3::prelude::*;

use crate::assembly::assemble;
use crate::calendar::build_calendar;
use crate::candidates::generate_candidates_for_windows;
use crate::config::OptimizerConfig;
use crate::dp::dp_search;
use crate::errors::OptimizeError;
use crate::forced::{mark_chosen_segments, run_forced_passes};
use crate::models::{weekday_from_index, CompanyOffRule, Day, Holiday, Stats};
use crate::pruning::prune_dominated;
use crate::{log_changes, log_checks, log_debug};

/// The pure, infallible engine entry point (C1 through C7). Never returns
/// `Result`: degenerate inputs (zero quota, an oversized quota, an empty
/// calendar) are absorbed per §7 rather than rejected.
pub fn optimize_calendar(
    start_date: NaiveDate,
    year: i32,
    holidays: &[Holiday],
    company_off: &[CompanyOffRule],
    config: &OptimizerConfig,
) -> (Vec<Day>, Vec<crate::models::Break>, Stats) {
    let verbosity = config.verbosity;
    let mut days = build_calendar(start_date, year, holidays, company_off);
    log_changes!(
        verbosity,
        "calendar horizon: {} days ({} .. {})",
        days.len(),
        start_date,
        days.last().map(|d| d.date).unwrap_or(start_date)
    );

    let windows = config.strategy.windows();
    let spacing = config.strategy.spacing();
    let quota = config.number_of_days;

    let raw_candidates = generate_candidates_for_windows(&days, windows);
    log_checks!(
        verbosity,
        "strategy {} generated {} raw candidates",
        config.strategy.as_str(),
        raw_candidates.len()
    );

    let pruned = prune_dominated(raw_candidates, quota);
    log_checks!(verbosity, "{} candidates survive dominance pruning", pruned.len());

    let dp_result = dp_search(&pruned, quota, spacing);
    log_debug!(
        verbosity,
        "dp search chose {} segments totalling {} days off, {} quota spent",
        dp_result.segments.len(),
        dp_result.total_days_off,
        dp_result.quota_spent
    );

    let mut breaks = mark_chosen_segments(&mut days, &dp_result.segments);
    let remaining = quota - dp_result.quota_spent;
    let remaining_after = run_forced_passes(&mut days, &mut breaks, remaining);
    log_changes!(
        verbosity,
        "forced passes consumed {} quota, {} left unspent",
        remaining - remaining_after,
        remaining_after
    );

    let (breaks, stats) = assemble(breaks);
    (days, breaks, stats)
}

/// `start_date` is *today* when `year` is the current calendar year,
/// otherwise January 1st of `year`.
fn resolve_start_date(year: i32) -> NaiveDate {
    let today = chrono::Local::now().date_naive();
    if today.year() == year {
        today
    } else {
        NaiveDate::from_ymd_opt(year, 1, 1).expect("valid year")
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, OptimizeError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| OptimizeError::InvalidDate {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_holidays(raw: Vec<(String, String)>) -> Result<Vec<Holiday>, OptimizeError> {
    raw.into_iter()
        .map(|(date, name)| Ok(Holiday::new(parse_date("holidays.date", &date)?, name)))
        .collect()
}

fn parse_company_off_single(raw: Vec<(String, String)>) -> Result<Vec<CompanyOffRule>, OptimizeError> {
    raw.into_iter()
        .map(|(date, name)| {
            Ok(CompanyOffRule::Single {
                date: parse_date("company_days_off.date", &date)?,
                name,
            })
        })
        .collect()
}

fn parse_company_off_recurring(
    raw: Vec<(u8, String, String, String)>,
) -> Result<Vec<CompanyOffRule>, OptimizeError> {
    raw.into_iter()
        .map(|(weekday, start_date, end_date, name)| {
            Ok(CompanyOffRule::Recurring {
                weekday: weekday_from_index(weekday as i64)?,
                start_date: parse_date("company_days_off_recurring.start_date", &start_date)?,
                end_date: parse_date("company_days_off_recurring.end_date", &end_date)?,
                name,
            })
        })
        .collect()
}

/// Build a year's CTO-day plan.
///
/// `holidays` and `company_days_off` are `(date, name)` pairs with dates in
/// `"YYYY-MM-DD"` form. `company_days_off_recurring` entries are
/// `(weekday, start_date, end_date, name)`, `weekday` being `0` (Sunday)
/// through `6` (Saturday).
#[pyfunction]
#[pyo3(signature = (
    number_of_days,
    strategy="balanced",
    year=None,
    holidays=None,
    company_days_off=None,
    company_days_off_recurring=None,
    verbosity=0
))]
#[allow(clippy::too_many_arguments)]
pub fn optimize(
    number_of_days: u32,
    strategy: &str,
    year: Option<i32>,
    holidays: Option<Vec<(String, String)>>,
    company_days_off: Option<Vec<(String, String)>>,
    company_days_off_recurring: Option<Vec<(u8, String, String, String)>>,
    verbosity: u8,
) -> PyResult<(Vec<Day>, Vec<crate::models::Break>, Stats)> {
    let year = year.unwrap_or_else(|| chrono::Local::now().date_naive().year());

    let holidays = parse_holidays(holidays.unwrap_or_default())?;

    let mut company_rules = parse_company_off_single(company_days_off.unwrap_or_default())?;
    company_rules.extend(parse_company_off_recurring(
        company_days_off_recurring.unwrap_or_default(),
    )?);

    let start_date = resolve_start_date(year);
    let config = OptimizerConfig::new(number_of_days, strategy, verbosity);

    Ok(optimize_calendar(
        start_date,
        year,
        &holidays,
        &company_rules,
        &config,
    ))
}
