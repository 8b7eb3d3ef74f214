// src/report/writer.rs

use std::io::Write;

use crate::errors::Result;
use crate::input::tables::DATE_FORMAT;
use crate::report::records::ScheduleRecord;
use crate::report::timeline::TimelineItem;

/// Header of the schedule CSV. The last column carries the row's duration in
/// days.
pub const CSV_HEADER: [&str; 5] = [
    "Task",
    "Start Date",
    "End Date",
    "Assigned Developers",
    "Effort Per Developer",
];

/// The five CSV fields of a record.
pub fn record_fields(record: &ScheduleRecord) -> [String; 5] {
    [
        record.label.clone(),
        record.start.format(DATE_FORMAT).to_string(),
        record.end.format(DATE_FORMAT).to_string(),
        record.developer.clone(),
        format!("{:.2}", record.duration_days),
    ]
}

/// Plain comma-joined rendering, used when echoing rows to stdout.
pub fn render_row(record: &ScheduleRecord) -> String {
    record_fields(record).join(",")
}

pub fn write_records_csv<W: Write>(out: W, records: &[ScheduleRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(record_fields(record))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_timeline_json<W: Write>(out: W, items: &[TimelineItem]) -> Result<()> {
    serde_json::to_writer_pretty(out, items).map_err(anyhow::Error::from)?;
    Ok(())
}
