// src/input/tasks.rs

//! The tasks table, including generated Frontend / QA companions.

use std::io::Read;

use csv::StringRecord;
use tracing::debug;

use crate::engine::effort::{adjusted_effort, companion_effort};
use crate::errors::{PlanError, Result};
use crate::input::tables::{
    csv_reader, field, line_of, parse_int, parse_real, require_columns, split_list,
};
use crate::model::{Task, TaskOrigin};

const TABLE: &str = "tasks";

pub const FRONTEND_SUFFIX: &str = "_Frontend";
pub const QA_SUFFIX: &str = "_QA";
pub const FRONTEND_TASK_TYPE: &str = "Frontend";
pub const QA_TASK_TYPE: &str = "QA";

/// `Name, TaskType, Priority, Effort, ParallelFactor, Dependencies,
/// [NeedsFrontend], [NeedsQA]`.
///
/// Effort is adjusted for parallelism here. Companion tasks are appended
/// right after their parent.
pub fn read_tasks<R: Read>(reader: R) -> Result<Vec<Task>> {
    let mut rdr = csv_reader(reader);
    let mut tasks = Vec::new();

    for result in rdr.records() {
        let record = result?;
        tasks.extend(tasks_from_record(&record)?);
    }

    Ok(tasks)
}

fn tasks_from_record(record: &StringRecord) -> Result<Vec<Task>> {
    require_columns(record, TABLE, 6)?;
    let line = line_of(record);

    let name = field(record, 0).to_string();
    let task_type = field(record, 1).to_string();
    let priority = parse_int(record, TABLE, 2, "Priority")?;
    let nominal = parse_real(record, TABLE, 3, "Effort")?;
    let parallel = parse_int(record, TABLE, 4, "ParallelFactor")?;
    let dependencies = split_list(field(record, 5));
    let needs_frontend = flag(record, 6);
    let needs_qa = flag(record, 7);

    if parallel < 1 {
        return Err(PlanError::record(
            TABLE,
            line,
            format!("ParallelFactor must be >= 1 (got {parallel}) for task '{name}'"),
        ));
    }
    if !nominal.is_finite() || nominal < 0.0 {
        return Err(PlanError::record(
            TABLE,
            line,
            format!("Effort must be a non-negative number (got {nominal}) for task '{name}'"),
        ));
    }
    let parallel = parallel as usize;

    let mut out = vec![
        Task::new(name.clone(), task_type, priority, parallel, adjusted_effort(nominal, parallel))
            .with_dependencies(dependencies),
    ];

    let mut frontend_name = None;
    if needs_frontend {
        let fe_name = format!("{name}{FRONTEND_SUFFIX}");
        out.push(
            Task::new(
                fe_name.clone(),
                FRONTEND_TASK_TYPE,
                priority,
                1,
                companion_effort(nominal, parallel),
            )
            .with_dependencies([name.clone()])
            .with_origin(TaskOrigin::Frontend { parent: name.clone() }),
        );
        frontend_name = Some(fe_name);
    }

    if needs_qa {
        let mut deps = vec![name.clone()];
        deps.extend(frontend_name);
        out.push(
            Task::new(
                format!("{name}{QA_SUFFIX}"),
                QA_TASK_TYPE,
                priority,
                1,
                companion_effort(nominal, parallel),
            )
            .with_dependencies(deps)
            .with_origin(TaskOrigin::Qa { parent: name.clone() }),
        );
    }

    debug!(task = %name, generated = out.len() - 1, "loaded task row");
    Ok(out)
}

/// Optional boolean column: only the exact text `true` counts.
fn flag(record: &StringRecord, idx: usize) -> bool {
    record.get(idx) == Some("true")
}
