// src/model/calendar.rs

//! Workday arithmetic and the on-call / leave calendar.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Date used for "unset" or unparseable values (0001-01-01).
pub const ZERO_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Saturday and Sunday are not workdays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The following calendar day (saturates at `NaiveDate::MAX`).
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

/// The next workday strictly after `date`.
pub fn next_workday(date: NaiveDate) -> NaiveDate {
    let mut result = next_day(date);
    while is_weekend(result) && result != NaiveDate::MAX {
        result = next_day(result);
    }
    result
}

/// Same day one year later; Feb 29 clamps to Feb 28.
pub fn one_year_after(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX)
}

/// Span between two dates in (possibly fractional) days.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let span = end.signed_duration_since(start);
    span.num_hours() as f64 / 24.0
}

/// Why a developer is blocked on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DutyKind {
    OnCall,
    Leave,
}

impl DutyKind {
    /// Label used for this kind of period in the emitted schedule.
    pub fn label(self) -> &'static str {
        match self {
            DutyKind::OnCall => "On-Call Duty",
            DutyKind::Leave => "Leave",
        }
    }
}

impl fmt::Display for DutyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DutyKind::OnCall => write!(f, "on-call"),
            DutyKind::Leave => write!(f, "leave"),
        }
    }
}

/// An inclusive `[start, end]` date range registered to a developer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyPeriod {
    pub dev_name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DutyPeriod {
    pub fn new(dev_name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            dev_name: dev_name.into(),
            start,
            end,
        }
    }

    /// Both ends inclusive.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// On-call and leave periods for the whole team.
///
/// The input lists are kept verbatim (in input order) for reporting;
/// lookups go through a per-developer index built once at construction.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    oncalls: Vec<DutyPeriod>,
    leaves: Vec<DutyPeriod>,
    by_dev: HashMap<String, Vec<(DutyKind, NaiveDate, NaiveDate)>>,
}

impl Calendar {
    pub fn new(oncalls: Vec<DutyPeriod>, leaves: Vec<DutyPeriod>) -> Self {
        let mut by_dev: HashMap<String, Vec<(DutyKind, NaiveDate, NaiveDate)>> = HashMap::new();

        // On-call entries go first so lookups report on-call before leave.
        for (kind, periods) in [(DutyKind::OnCall, &oncalls), (DutyKind::Leave, &leaves)] {
            for p in periods.iter() {
                by_dev
                    .entry(p.dev_name.clone())
                    .or_default()
                    .push((kind, p.start, p.end));
            }
        }

        Self {
            oncalls,
            leaves,
            by_dev,
        }
    }

    pub fn oncalls(&self) -> &[DutyPeriod] {
        &self.oncalls
    }

    pub fn leaves(&self) -> &[DutyPeriod] {
        &self.leaves
    }

    /// The duty that blocks `dev_name` on `date`, if any.
    pub fn duty_on(&self, dev_name: &str, date: NaiveDate) -> Option<DutyKind> {
        self.by_dev.get(dev_name).and_then(|periods| {
            periods
                .iter()
                .find(|(_, start, end)| date >= *start && date <= *end)
                .map(|(kind, _, _)| *kind)
        })
    }

    pub fn is_on_call(&self, dev_name: &str, date: NaiveDate) -> bool {
        self.covered_by(dev_name, date, DutyKind::OnCall)
    }

    pub fn is_on_leave(&self, dev_name: &str, date: NaiveDate) -> bool {
        self.covered_by(dev_name, date, DutyKind::Leave)
    }

    fn covered_by(&self, dev_name: &str, date: NaiveDate, wanted: DutyKind) -> bool {
        self.by_dev.get(dev_name).is_some_and(|periods| {
            periods
                .iter()
                .any(|(kind, start, end)| *kind == wanted && date >= *start && date <= *end)
        })
    }
}
