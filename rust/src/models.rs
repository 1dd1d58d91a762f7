//! Core data types for the CTO-day optimiser.

use chrono::NaiveDate;
use pyo3::prelude::*;

/// One position in the planning horizon.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Day {
    #[pyo3(get, set)]
    pub date: NaiveDate,
    #[pyo3(get, set)]
    pub is_weekend: bool,
    #[pyo3(get, set)]
    pub is_public_holiday: bool,
    #[pyo3(get, set)]
    pub holiday_name: Option<String>,
    #[pyo3(get, set)]
    pub is_company_off: bool,
    #[pyo3(get, set)]
    pub company_name: Option<String>,
    #[pyo3(get, set)]
    pub is_cto: bool,
    #[pyo3(get, set)]
    pub in_break: bool,
}

impl Day {
    pub fn new(date: NaiveDate, is_weekend: bool) -> Self {
        Self {
            date,
            is_weekend,
            is_public_holiday: false,
            holiday_name: None,
            is_company_off: false,
            company_name: None,
            is_cto: false,
            in_break: false,
        }
    }

    /// A day is fixed-off iff it's already non-working for a reason other
    /// than spent quota.
    pub fn is_fixed_off(&self) -> bool {
        self.is_weekend || self.is_public_holiday || self.is_company_off
    }
}

#[pymethods]
impl Day {
    fn __repr__(&self) -> String {
        format!(
            "Day(date={}, weekend={}, holiday={}, company_off={}, cto={})",
            self.date, self.is_weekend, self.is_public_holiday, self.is_company_off, self.is_cto
        )
    }
}

/// A named public holiday on a specific date.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Holiday {
    #[pyo3(get, set)]
    pub date: NaiveDate,
    #[pyo3(get, set)]
    pub name: String,
}

#[pymethods]
impl Holiday {
    #[new]
    pub fn new(date: NaiveDate, name: String) -> Self {
        Self { date, name }
    }

    fn __repr__(&self) -> String {
        format!("Holiday(date={}, name={:?})", self.date, self.name)
    }
}

/// A single company-provided day off.
#[pyclass]
#[derive(Clone, Debug)]
pub struct CompanyOffDay {
    #[pyo3(get, set)]
    pub date: NaiveDate,
    #[pyo3(get, set)]
    pub name: String,
}

#[pymethods]
impl CompanyOffDay {
    #[new]
    pub fn new(date: NaiveDate, name: String) -> Self {
        Self { date, name }
    }

    fn __repr__(&self) -> String {
        format!("CompanyOffDay(date={}, name={:?})", self.date, self.name)
    }
}

/// A recurring company-provided day off: every occurrence of `weekday` in
/// `[start_date, end_date]` (closed interval).
#[pyclass]
#[derive(Clone, Debug)]
pub struct CompanyOffRecurring {
    /// 0 = Sunday, ..., 6 = Saturday.
    #[pyo3(get, set)]
    pub weekday: u8,
    #[pyo3(get, set)]
    pub start_date: NaiveDate,
    #[pyo3(get, set)]
    pub end_date: NaiveDate,
    #[pyo3(get, set)]
    pub name: String,
}

#[pymethods]
impl CompanyOffRecurring {
    #[new]
    pub fn new(weekday: u8, start_date: NaiveDate, end_date: NaiveDate, name: String) -> Self {
        Self {
            weekday,
            start_date,
            end_date,
            name,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CompanyOffRecurring(weekday={}, start={}, end={}, name={:?})",
            self.weekday, self.start_date, self.end_date, self.name
        )
    }
}

/// Internal tagged representation of a company-off input, built from the two
/// pyclass wrapper variants above.
#[derive(Clone, Debug)]
pub enum CompanyOffRule {
    Single {
        date: NaiveDate,
        name: String,
    },
    Recurring {
        weekday: chrono::Weekday,
        start_date: NaiveDate,
        end_date: NaiveDate,
        name: String,
    },
}

impl From<&CompanyOffDay> for CompanyOffRule {
    fn from(d: &CompanyOffDay) -> Self {
        CompanyOffRule::Single {
            date: d.date,
            name: d.name.clone(),
        }
    }
}

impl TryFrom<&CompanyOffRecurring> for CompanyOffRule {
    type Error = crate::errors::OptimizeError;

    fn try_from(r: &CompanyOffRecurring) -> Result<Self, Self::Error> {
        Ok(CompanyOffRule::Recurring {
            weekday: weekday_from_index(r.weekday as i64)?,
            start_date: r.start_date,
            end_date: r.end_date,
            name: r.name.clone(),
        })
    }
}

/// Convert a `0..=6` (Sunday-first) weekday index into `chrono::Weekday`.
pub fn weekday_from_index(index: i64) -> Result<chrono::Weekday, crate::errors::OptimizeError> {
    use chrono::Weekday::*;
    match index {
        0 => Ok(Sun),
        1 => Ok(Mon),
        2 => Ok(Tue),
        3 => Ok(Wed),
        4 => Ok(Thu),
        5 => Ok(Fri),
        6 => Ok(Sat),
        other => Err(crate::errors::OptimizeError::InvalidWeekday(other)),
    }
}

/// A realised contiguous run of off-days in the final plan.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct Break {
    #[pyo3(get, set)]
    pub start_date: Option<NaiveDate>,
    #[pyo3(get, set)]
    pub end_date: Option<NaiveDate>,
    #[pyo3(get, set)]
    pub days: Vec<Day>,
    #[pyo3(get, set)]
    pub total_days: u32,
    #[pyo3(get, set)]
    pub cto_days: u32,
    #[pyo3(get, set)]
    pub public_holidays: u32,
    #[pyo3(get, set)]
    pub weekends: u32,
    #[pyo3(get, set)]
    pub company_days_off: u32,
}

impl Break {
    /// Build a break from a contiguous slice of (already-marked) days.
    /// Recomputes the per-category counters and sets `total_days` to their
    /// sum, per the documented counting quirk (§3/§8 property 5 of
    /// SPEC_FULL.md): a holiday-weekend day contributes to both counters, so
    /// `total_days` is not simply the span length.
    pub fn from_days(days: Vec<Day>) -> Self {
        let start_date = days.first().map(|d| d.date);
        let end_date = days.last().map(|d| d.date);

        let mut cto_days = 0u32;
        let mut public_holidays = 0u32;
        let mut weekends = 0u32;
        let mut company_days_off = 0u32;

        for day in &days {
            if day.is_cto {
                cto_days += 1;
            }
            if day.is_public_holiday {
                public_holidays += 1;
            }
            if day.is_weekend {
                weekends += 1;
            }
            if day.is_company_off {
                company_days_off += 1;
            }
        }

        let total_days = cto_days + public_holidays + weekends + company_days_off;

        Self {
            start_date,
            end_date,
            days,
            total_days,
            cto_days,
            public_holidays,
            weekends,
            company_days_off,
        }
    }

    /// Recompute counters and `total_days` after the day list has been
    /// mutated (e.g. a day appended by forced extension).
    pub fn recompute_counts(&mut self) {
        let mut cto_days = 0u32;
        let mut public_holidays = 0u32;
        let mut weekends = 0u32;
        let mut company_days_off = 0u32;

        for day in &self.days {
            if day.is_cto {
                cto_days += 1;
            }
            if day.is_public_holiday {
                public_holidays += 1;
            }
            if day.is_weekend {
                weekends += 1;
            }
            if day.is_company_off {
                company_days_off += 1;
            }
        }

        self.start_date = self.days.first().map(|d| d.date);
        self.end_date = self.days.last().map(|d| d.date);
        self.cto_days = cto_days;
        self.public_holidays = public_holidays;
        self.weekends = weekends;
        self.company_days_off = company_days_off;
        self.total_days = cto_days + public_holidays + weekends + company_days_off;
    }
}

#[pymethods]
impl Break {
    fn __repr__(&self) -> String {
        format!(
            "Break(start={:?}, end={:?}, total_days={}, cto_days={})",
            self.start_date, self.end_date, self.total_days, self.cto_days
        )
    }
}

/// Totals rolled up from the final break list.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    #[pyo3(get, set)]
    pub total_cto_days: u32,
    #[pyo3(get, set)]
    pub total_public_holidays: u32,
    #[pyo3(get, set)]
    pub total_weekends: u32,
    #[pyo3(get, set)]
    pub total_company_days_off: u32,
    #[pyo3(get, set)]
    pub total_days_off: u32,
    /// Known quirk (SPEC_FULL.md §9 open question 1): duplicates
    /// `total_cto_days`. Kept bug-compatible rather than renamed or removed.
    #[pyo3(get, set)]
    pub total_extended_weekends: u32,
}

#[pymethods]
impl Stats {
    fn __repr__(&self) -> String {
        format!(
            "Stats(total_cto_days={}, total_days_off={})",
            self.total_cto_days, self.total_days_off
        )
    }
}
