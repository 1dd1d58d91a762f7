//! Error types for the one fallible surface of the crate: parsing caller-supplied
//! date strings at the pyo3 boundary. The optimisation engine itself never fails.

use thiserror::Error;

/// Errors that can occur while preparing inputs for the optimiser.
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("invalid date {value:?} for {field}: {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid weekday {0}, expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday(i64),
}

impl From<OptimizeError> for pyo3::PyErr {
    fn from(err: OptimizeError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
