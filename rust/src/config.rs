//! Configuration types for the CTO-day optimiser.

use pyo3::prelude::*;

/// Planning style. Controls the candidate window lengths (C2) and the DP
/// spacing rule (C4).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Balanced,
    LongWeekends,
    MiniBreaks,
    WeekLongBreaks,
    ExtendedVacations,
}

impl Strategy {
    /// Parse a caller-supplied strategy name. Unrecognised names fall back to
    /// `Balanced` per the error-handling design (an unknown strategy is never
    /// a fatal error).
    pub fn parse(name: &str) -> Self {
        match name {
            "longWeekends" => Self::LongWeekends,
            "miniBreaks" => Self::MiniBreaks,
            "weekLongBreaks" => Self::WeekLongBreaks,
            "extendedVacations" => Self::ExtendedVacations,
            "balanced" => Self::Balanced,
            _ => Self::Balanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::LongWeekends => "longWeekends",
            Self::MiniBreaks => "miniBreaks",
            Self::WeekLongBreaks => "weekLongBreaks",
            Self::ExtendedVacations => "extendedVacations",
        }
    }

    /// The `(min_len, max_len)` candidate windows C2 is invoked with for this
    /// strategy. `balanced` returns the union of all four base windows.
    pub fn windows(&self) -> &'static [(u32, u32)] {
        match self {
            Self::LongWeekends => &[(3, 4)],
            Self::MiniBreaks => &[(5, 6)],
            Self::WeekLongBreaks => &[(7, 9)],
            Self::ExtendedVacations => &[(10, 15)],
            Self::Balanced => &[(3, 4), (5, 6), (7, 9), (10, 15)],
        }
    }

    /// Minimum spacing (in days) the DP search enforces between the end of
    /// one chosen segment and the start of the next.
    pub fn spacing(&self) -> i64 {
        match self {
            Self::LongWeekends => 7,
            Self::MiniBreaks => 14,
            Self::WeekLongBreaks => 21,
            Self::ExtendedVacations => 30,
            Self::Balanced => 21,
        }
    }
}

/// Top-level configuration for one `optimize_calendar` invocation.
#[pyclass]
#[derive(Clone, Debug)]
pub struct OptimizerConfig {
    /// Discretionary off-day quota (Q).
    #[pyo3(get, set)]
    pub number_of_days: u32,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Planning style. Not directly exposed to Python; use `strategy_str`.
    pub strategy: Strategy,
}

#[pymethods]
impl OptimizerConfig {
    #[new]
    #[pyo3(signature = (number_of_days, strategy="balanced", verbosity=0))]
    pub fn new(number_of_days: u32, strategy: &str, verbosity: u8) -> Self {
        Self {
            number_of_days,
            verbosity,
            strategy: Strategy::parse(strategy),
        }
    }

    #[getter]
    fn strategy_str(&self) -> &'static str {
        self.strategy.as_str()
    }

    #[setter]
    fn set_strategy_str(&mut self, value: &str) {
        self.strategy = Strategy::parse(value);
    }

    fn __repr__(&self) -> String {
        format!(
            "OptimizerConfig(number_of_days={}, strategy={:?})",
            self.number_of_days, self.strategy
        )
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            number_of_days: 0,
            verbosity: 0,
            strategy: Strategy::Balanced,
        }
    }
}
