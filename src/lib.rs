// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod input;
pub mod logging;
pub mod model;
pub mod report;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate_from_fs;
use crate::dag::ensure_acyclic;
use crate::engine::Schedule;
use crate::errors::PlanError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::input::tables::DATE_FORMAT;
use crate::input::{PlanInputs, load_inputs};
use crate::report::{build_records, build_timeline, render_row, write_records_csv, write_timeline_json};
use crate::types::ParseMode;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (+ CLI overrides)
/// - input tables and the dependency cycle gate
/// - the scheduling engine
/// - the schedule CSV / timeline JSON outputs
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let fs = RealFileSystem;
    let mut cfg = load_and_validate_from_fs(&fs, &config_path)
        .with_context(|| format!("validating config {:?}", config_path))?;
    apply_cli_overrides(&mut cfg, &args)?;

    let root = config_root_dir(&config_path);
    let inputs = load_plan(&fs, &cfg, &root)?;

    if args.dry_run {
        print_dry_run(&cfg, &inputs);
        return Ok(());
    }

    let start = cfg
        .schedule
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());
    let schedule = engine::schedule(
        inputs.tasks,
        inputs.developers,
        inputs.roles,
        inputs.calendar,
        start,
        cfg.limits(),
    );

    emit_outputs(&fs, &cfg, &root, &schedule)?;

    if !schedule.outcome.is_complete() {
        warn!(
            completed = schedule.outcome.completed_tasks,
            total = schedule.outcome.total_tasks,
            "schedule is incomplete; some tasks never finished"
        );
    }
    Ok(())
}

/// Load the input tables named by `cfg` and refuse cyclic dependencies.
pub fn load_plan(fs: &dyn FileSystem, cfg: &ConfigFile, root: &Path) -> errors::Result<PlanInputs> {
    let inputs = load_inputs(fs, &cfg.input_paths(root), cfg.schedule.mode)?;
    ensure_acyclic(&inputs.tasks)?;
    Ok(inputs)
}

/// Write the schedule CSV (and timeline JSON if configured), echoing each row
/// to stdout.
pub fn emit_outputs(
    fs: &dyn FileSystem,
    cfg: &ConfigFile,
    root: &Path,
    schedule: &Schedule,
) -> errors::Result<()> {
    let records = build_records(&schedule.tasks, &schedule.calendar);

    let mut buf = Vec::new();
    write_records_csv(&mut buf, &records)?;
    let csv_path = root.join(&cfg.output.csv);
    fs.write(&csv_path, &buf)?;

    for record in &records {
        println!("{}", render_row(record));
    }

    if let Some(timeline) = &cfg.output.timeline {
        let items = build_timeline(&schedule.tasks, &schedule.calendar);
        let mut buf = Vec::new();
        write_timeline_json(&mut buf, &items)?;
        fs.write(&root.join(timeline), &buf)?;
        debug!(items = items.len(), path = %timeline, "wrote timeline");
    }

    info!(
        rows = records.len(),
        path = %csv_path.display(),
        finish = ?schedule.outcome.finish_date,
        "wrote schedule"
    );
    Ok(())
}

fn apply_cli_overrides(cfg: &mut ConfigFile, args: &CliArgs) -> errors::Result<()> {
    if let Some(raw) = &args.start_date {
        let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
            PlanError::ConfigError(format!("--start-date '{raw}' is not a YYYY-MM-DD date: {e}"))
        })?;
        cfg.schedule.start_date = Some(date);
    }
    if args.strict {
        cfg.schedule.mode = ParseMode::Strict;
    }
    if let Some(output) = &args.output {
        cfg.output.csv = output.clone();
    }
    Ok(())
}

/// Figure out the directory relative input/output paths are resolved against.
///
/// - If the config path has a non-empty parent (e.g. "plans/Workplan.toml"),
///   we use that directory.
/// - If it's just a bare filename like "Workplan.toml" (parent = ""),
///   we fall back to the current working directory "."
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Simple dry-run output: print tasks, developers and calendars.
fn print_dry_run(cfg: &ConfigFile, inputs: &PlanInputs) {
    println!("workplan dry-run");
    match cfg.schedule.start_date {
        Some(date) => println!("  schedule.start_date = {date}"),
        None => println!("  schedule.start_date = (today)"),
    }
    println!("  schedule.mode = {:?}", cfg.schedule.mode);
    println!(
        "  schedule.max_projection_days = {}",
        cfg.schedule.max_projection_days
    );
    println!("  schedule.max_schedule_days = {}", cfg.schedule.max_schedule_days);
    println!();

    println!("tasks ({}):", inputs.tasks.len());
    for task in &inputs.tasks {
        println!("  - {}", task.name);
        println!("      type: {}", task.task_type);
        println!("      priority: {}", task.priority);
        println!("      effort: {}", task.effort);
        println!("      parallel_factor: {}", task.parallel_factor);
        if !task.dependencies.is_empty() {
            println!("      after: {:?}", task.dependencies);
        }
        if task.origin != model::TaskOrigin::Input {
            println!("      generated: {:?}", task.origin);
        }
    }
    println!();

    println!("developers ({}):", inputs.developers.len());
    for dev in &inputs.developers {
        let availability = inputs
            .roles
            .availability_of(&dev.role)
            .map(|a| format!("{a}"))
            .unwrap_or_else(|| "unknown role".to_string());
        println!(
            "  - {} ({}, {}) {:?}",
            dev.name, dev.role, availability, dev.task_types
        );
    }
    println!();

    println!(
        "calendar: {} on-call period(s), {} leave period(s)",
        inputs.calendar.oncalls().len(),
        inputs.calendar.leaves().len()
    );

    debug!("dry-run complete (no scheduling)");
}
