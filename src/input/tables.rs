// src/input/tables.rs

//! Readers for the comma-separated input tables.
//!
//! Every table has a header row, which is skipped. Rows must all have the
//! header's width; a mismatch surfaces as [`PlanError::Csv`].

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::warn;

use crate::errors::{PlanError, Result};
use crate::model::{Developer, DutyPeriod, Role, RoleTable, ZERO_DATE};
use crate::types::ParseMode;

/// Date format used by every input and output table.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build a CSV reader with the settings shared by all tables.
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new().has_headers(true).from_reader(reader)
}

/// Line number of a record, for error messages.
pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

pub(crate) fn require_columns(
    record: &StringRecord,
    table: &'static str,
    min: usize,
) -> Result<()> {
    if record.len() < min {
        return Err(PlanError::record(
            table,
            line_of(record),
            format!("expected at least {min} columns, got {}", record.len()),
        ));
    }
    Ok(())
}

pub(crate) fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

pub(crate) fn parse_int(record: &StringRecord, table: &'static str, idx: usize, column: &str) -> Result<i64> {
    let raw = field(record, idx).trim();
    raw.parse::<i64>().map_err(|e| {
        PlanError::record(table, line_of(record), format!("{column} '{raw}' is not an integer: {e}"))
    })
}

pub(crate) fn parse_real(record: &StringRecord, table: &'static str, idx: usize, column: &str) -> Result<f64> {
    let raw = field(record, idx).trim();
    raw.parse::<f64>().map_err(|e| {
        PlanError::record(table, line_of(record), format!("{column} '{raw}' is not a number: {e}"))
    })
}

/// Parse a `YYYY-MM-DD` date.
///
/// Lenient mode maps failures to [`ZERO_DATE`] with a warning.
pub(crate) fn parse_date(
    record: &StringRecord,
    table: &'static str,
    idx: usize,
    column: &str,
    mode: ParseMode,
) -> Result<NaiveDate> {
    let raw = field(record, idx).trim();
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(e) if mode.is_strict() => Err(PlanError::record(
            table,
            line_of(record),
            format!("{column} '{raw}' is not a YYYY-MM-DD date: {e}"),
        )),
        Err(_) => {
            warn!(table, line = line_of(record), column, value = raw, "unparseable date; using zero date");
            Ok(ZERO_DATE)
        }
    }
}

/// Split a comma-joined list, trimming items and dropping empty ones.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Name, AvailabilityPercent`.
pub fn read_roles<R: Read>(reader: R, mode: ParseMode) -> Result<RoleTable> {
    const TABLE: &str = "roles";
    let mut rdr = csv_reader(reader);
    let mut roles = RoleTable::new();

    for result in rdr.records() {
        let record = result?;
        require_columns(&record, TABLE, 2)?;

        let name = field(&record, 0).to_string();
        let availability = parse_real(&record, TABLE, 1, "AvailabilityPercent")?;

        if !(availability > 0.0 && availability <= 1.0) {
            if mode.is_strict() {
                return Err(PlanError::record(
                    TABLE,
                    line_of(&record),
                    format!("AvailabilityPercent {availability} for role '{name}' is outside (0, 1]"),
                ));
            }
            warn!(role = %name, availability, "role availability outside (0, 1]");
        }

        roles.insert(Role::new(name, availability));
    }

    Ok(roles)
}

/// `Name, Role, TaskTypes(comma-joined)`.
pub fn read_developers<R: Read>(reader: R) -> Result<Vec<Developer>> {
    const TABLE: &str = "developers";
    let mut rdr = csv_reader(reader);
    let mut developers = Vec::new();

    for result in rdr.records() {
        let record = result?;
        require_columns(&record, TABLE, 3)?;

        developers.push(Developer::new(
            field(&record, 0),
            field(&record, 1),
            split_list(field(&record, 2)),
        ));
    }

    Ok(developers)
}

/// `DevName, StartDate, EndDate` for on-call or leave tables.
pub fn read_duty_periods<R: Read>(
    reader: R,
    table: &'static str,
    mode: ParseMode,
) -> Result<Vec<DutyPeriod>> {
    let mut rdr = csv_reader(reader);
    let mut periods = Vec::new();

    for result in rdr.records() {
        let record = result?;
        require_columns(&record, table, 3)?;

        let start = parse_date(&record, table, 1, "StartDate", mode)?;
        let end = parse_date(&record, table, 2, "EndDate", mode)?;
        periods.push(DutyPeriod::new(field(&record, 0), start, end));
    }

    Ok(periods)
}
