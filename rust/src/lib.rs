//! Rust implementation of the CTO-day planning engine.
//!
//! This module provides the calendar construction, candidate search, and
//! forced-pass algorithms behind a year's paid-time-off plan, plus the
//! Python bindings (via pyo3) used to call it.

#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

pub mod assembly;
pub mod calendar;
pub mod candidates;
pub mod config;
pub mod dp;
pub mod errors;
pub mod forced;
pub mod logging;
pub mod models;
pub mod optimizer;
pub mod pruning;

pub use assembly::assemble;
pub use calendar::build_calendar;
pub use candidates::{generate_candidates, generate_candidates_for_windows, Candidate};
pub use config::{OptimizerConfig, Strategy};
pub use dp::{dp_search, DpResult};
pub use errors::OptimizeError;
pub use forced::{mark_chosen_segments, run_forced_passes};
pub use models::{
    weekday_from_index, Break, CompanyOffDay, CompanyOffRecurring, CompanyOffRule, Day, Holiday,
    Stats,
};
pub use optimizer::{optimize, optimize_calendar};
pub use pruning::prune_dominated;

/// The cto_planner_rust Python module.
#[pymodule]
fn cto_planner_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Day>()?;
    m.add_class::<Holiday>()?;
    m.add_class::<CompanyOffDay>()?;
    m.add_class::<CompanyOffRecurring>()?;
    m.add_class::<Break>()?;
    m.add_class::<Stats>()?;

    // Config types
    m.add_class::<OptimizerConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(optimize, m)?)?;

    Ok(())
}
