// src/report/mod.rs

//! Report emitter: turns a finished run into output rows.
//!
//! - [`records`] flattens tasks and duty periods into schedule rows.
//! - [`timeline`] builds `{id, start, end, content}` visualisation items.
//! - [`writer`] serializes both (CSV and JSON).

pub mod records;
pub mod timeline;
pub mod writer;

pub use records::{RecordKind, ScheduleRecord, build_records};
pub use timeline::{TimelineItem, build_timeline};
pub use writer::{CSV_HEADER, render_row, write_records_csv, write_timeline_json};
