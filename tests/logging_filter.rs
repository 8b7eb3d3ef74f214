// tests/logging_filter.rs
use workplan::cli::LogLevel;
use workplan::logging::filter_directives;

#[test]
fn cli_level_beats_environment() {
    assert_eq!(filter_directives(Some(LogLevel::Debug), Some("trace")), "debug");
    assert_eq!(filter_directives(Some(LogLevel::Error), None), "error");
}

#[test]
fn environment_accepts_levels_and_directives() {
    assert_eq!(filter_directives(None, Some("WARNING")), "warn");
    assert_eq!(filter_directives(None, Some(" trace ")), "trace");
    assert_eq!(
        filter_directives(None, Some("workplan::engine=trace,info")),
        "workplan::engine=trace,info"
    );
}

#[test]
fn missing_or_broken_environment_falls_back_to_info() {
    assert_eq!(filter_directives(None, None), "info");
    assert_eq!(filter_directives(None, Some("   ")), "info");
    assert_eq!(filter_directives(None, Some("workplan=loud")), "info");
}
