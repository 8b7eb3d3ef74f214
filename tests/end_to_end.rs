// tests/end_to_end.rs
mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use workplan::cli::CliArgs;
use workplan::config::{ConfigFile, parse_str};
use workplan::engine;
use workplan::errors::PlanError;
use workplan::fs::mock::MockFileSystem;
use workplan::fs::{FileSystem, RealFileSystem};
use workplan::report::TimelineItem;
use workplan::{emit_outputs, load_plan, run};

type TestResult = Result<(), Box<dyn Error>>;

const ROLES: &str = "Name,AvailabilityPercent\nSenior,1.0\nJunior,0.5\n";
const DEVELOPERS: &str = "Name,Role,TaskTypes\n\
                          alice,Senior,Backend\n\
                          bob,Junior,\"Frontend,QA\"\n";
const ONCALLS: &str = "DevName,StartDate,EndDate\nbob,2025-01-13,2025-01-13\n";
const LEAVES: &str = "DevName,StartDate,EndDate\n";
const TASKS: &str = "Name,TaskType,Priority,Effort,ParallelFactor,Dependencies,NeedsFrontend,NeedsQA\n\
                     Auth,Backend,1,2,1,,false,true\n";

fn write_plan(root: &Path, tasks: &str) -> std::io::Result<PathBuf> {
    fs::write(root.join("roles.csv"), ROLES)?;
    fs::write(root.join("developers.csv"), DEVELOPERS)?;
    fs::write(root.join("oncalls.csv"), ONCALLS)?;
    fs::write(root.join("leaves.csv"), LEAVES)?;
    fs::write(root.join("tasks.csv"), tasks)?;

    let config = root.join("Workplan.toml");
    fs::write(
        &config,
        "[schedule]\nstart_date = \"2025-01-06\"\n\n[output]\ntimeline = \"timeline.json\"\n",
    )?;
    Ok(config)
}

fn args(config: &Path) -> CliArgs {
    CliArgs {
        config: config.to_string_lossy().into_owned(),
        start_date: None,
        strict: false,
        output: None,
        log_level: None,
        dry_run: false,
    }
}

#[test]
fn run_writes_schedule_and_timeline() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let config = write_plan(dir.path(), TASKS)?;

    run(args(&config))?;

    // Auth: 2 * 1.5 = 3 units for alice, Mon..Wed.
    // Auth_QA: round(2 * 0.25 * 1.5) = 1 unit at 0.5/day for bob, Wed..Thu.
    let csv = fs::read_to_string(dir.path().join("schedule.csv"))?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Task,Start Date,End Date,Assigned Developers,Effort Per Developer",
            "Auth,2025-01-06,2025-01-08,alice,2.00",
            "Auth_QA,2025-01-08,2025-01-09,bob,1.00",
            "On-Call Duty,2025-01-13,2025-01-13,bob,0.00",
        ]
    );

    let json = fs::read_to_string(dir.path().join("timeline.json"))?;
    let items: Vec<TimelineItem> = serde_json::from_str(&json)?;
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["task_Auth_alice", "task_Auth_QA_bob", "oncall_0"]);
    Ok(())
}

#[test]
fn cli_overrides_take_precedence() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let config = write_plan(dir.path(), TASKS)?;

    let mut args = args(&config);
    args.start_date = Some("2025-01-13".to_string());
    args.output = Some("override.csv".to_string());
    run(args)?;

    assert!(!dir.path().join("schedule.csv").exists());
    let csv = fs::read_to_string(dir.path().join("override.csv"))?;
    assert!(csv.contains("Auth,2025-01-13,2025-01-15,alice,2.00"));
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let config = write_plan(dir.path(), TASKS)?;

    let mut args = args(&config);
    args.dry_run = true;
    run(args)?;

    assert!(!dir.path().join("schedule.csv").exists());
    Ok(())
}

#[test]
fn cyclic_plan_is_refused() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let tasks = "Name,TaskType,Priority,Effort,ParallelFactor,Dependencies\n\
                 A,Backend,1,1,1,B\n\
                 B,Backend,1,1,1,A\n";
    let config = write_plan(dir.path(), tasks)?;

    let err = run(args(&config)).unwrap_err();
    assert!(format!("{err:#}").contains("Cycle detected"));
    assert!(!dir.path().join("schedule.csv").exists());
    Ok(())
}

#[test]
fn strict_flag_rejects_dangling_dependency() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let tasks = "Name,TaskType,Priority,Effort,ParallelFactor,Dependencies\n\
                 A,Backend,1,1,1,Ghost\n";
    let config = write_plan(dir.path(), tasks)?;

    let mut strict = args(&config);
    strict.strict = true;
    let err = run(strict).unwrap_err();
    assert!(format!("{err:#}").contains("Ghost"));
    Ok(())
}

#[test]
fn bad_start_date_override_is_config_error() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let config = write_plan(dir.path(), TASKS)?;

    let mut args = args(&config);
    args.start_date = Some("next monday".to_string());
    let err = run(args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlanError>(),
        Some(PlanError::ConfigError(_))
    ));
    Ok(())
}

#[test]
fn pipeline_runs_against_mock_filesystem() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    let root = PathBuf::from("/team");
    fs.add_file(root.join("roles.csv"), ROLES);
    fs.add_file(root.join("developers.csv"), DEVELOPERS);
    fs.add_file(root.join("oncalls.csv"), ONCALLS);
    fs.add_file(root.join("leaves.csv"), LEAVES);
    fs.add_file(root.join("tasks.csv"), TASKS);

    let cfg = ConfigFile::try_from(parse_str("[schedule]\nstart_date = \"2025-01-06\"\n")?)?;
    let inputs = load_plan(&fs, &cfg, &root)?;
    assert_eq!(inputs.tasks.len(), 2);

    let schedule = engine::schedule(
        inputs.tasks,
        inputs.developers,
        inputs.roles,
        inputs.calendar,
        cfg.schedule.start_date.ok_or("start date missing")?,
        cfg.limits(),
    );
    assert!(schedule.outcome.is_complete());

    emit_outputs(&fs, &cfg, &root, &schedule)?;
    let csv = fs
        .contents(root.join("schedule.csv"))
        .ok_or("schedule.csv was not written")?;
    assert!(csv.starts_with("Task,Start Date,End Date"));
    assert!(csv.contains("Auth_QA,2025-01-08,2025-01-09,bob,1.00"));
    assert!(fs.contents(root.join("timeline.json")).is_none());
    Ok(())
}

#[test]
fn real_filesystem_creates_output_directories() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let target = dir.path().join("out").join("nested").join("schedule.csv");
    let fs = RealFileSystem;

    assert!(!fs.exists(&target));
    fs.write(&target, b"Task\n")?;
    assert!(fs.exists(&target));
    assert_eq!(fs.read_to_string(&target)?, "Task\n");
    Ok(())
}

#[test]
fn mock_filesystem_reports_missing_files() {
    init_tracing();

    let fs = MockFileSystem::new();
    let path = Path::new("/nowhere/tasks.csv");
    assert!(!fs.exists(path));
    assert!(fs.read_to_string(path).is_err());
    assert!(fs.open_read(path).is_err());
}
