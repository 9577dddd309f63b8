//! End-to-end runs: synthetic log -> ingest -> engine -> artifacts.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sentinel_core::{Policy, RunSummary, WILDCARD};
use sentinel_ingest::read_activity_log;
use sentinel_report::{RunLock, SinkSet, TableSink, TranscriptSink, write_summary_json};
use sentinel_rules::RuleEngine;
use sentinel_simulation::{GeneratorConfig, generate_events, write_activity_log};

fn office_policy() -> Policy {
    Policy {
        work_start: 9,
        work_end: 17,
        action_threshold: 10,
        role_permissions: HashMap::from([
            ("admin".to_owned(), vec![WILDCARD.to_owned()]),
            ("intern".to_owned(), vec!["public_docs".to_owned()]),
            ("employee".to_owned(), vec!["project_docs".to_owned()]),
        ]),
    }
}

/// One full run into `out`, the way the CLI wires the pieces together.
fn run_scan(log: &Path, policy: &Policy, out: &Path) -> RunSummary {
    let activity = read_activity_log(log).unwrap();
    let evaluation = RuleEngine::with_builtins().evaluate(&activity.events, policy);
    let summary = RunSummary::from_alerts(
        &evaluation.alerts,
        activity.skipped.len(),
        evaluation.failures.len(),
    );

    let _lock = RunLock::acquire(out).unwrap();
    let mut sinks = SinkSet::new();
    sinks.push(TranscriptSink::create(out.join(TranscriptSink::FILE_NAME)).unwrap());
    sinks.push(TableSink::create(out.join(TableSink::FILE_NAME)).unwrap());
    for alert in &evaluation.alerts {
        sinks.record(alert).unwrap();
    }
    sinks.finish(&summary).unwrap();
    write_summary_json(&out.join("summary.json"), &summary).unwrap();
    summary
}

#[test]
fn generated_log_round_trips_through_ingest() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("activity_logs.csv");

    let events = generate_events(&GeneratorConfig { count: 30, seed: Some(42) });
    write_activity_log(&log, &events).unwrap();

    let back = read_activity_log(&log).unwrap();
    assert!(back.skipped.is_empty());
    assert_eq!(back.events, events);
}

#[test]
fn injected_rows_always_trip_the_detector() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("activity_logs.csv");

    // No random rows: only the three injected suspicious ones.
    let events = generate_events(&GeneratorConfig { count: 0, seed: Some(1) });
    write_activity_log(&log, &events).unwrap();

    let summary = run_scan(&log, &office_policy(), dir.path());

    // Each injected row is off-hours and also violates role permissions.
    assert_eq!(summary.medium, 3);
    assert_eq!(summary.high, 3);
    assert_eq!(summary.total_alerts, summary.high + summary.medium + summary.low);
    assert_eq!(summary.flagged_users, ["emp02", "emp01"]);

    let table = fs::read_to_string(dir.path().join(TableSink::FILE_NAME)).unwrap();
    assert_eq!(table.lines().count(), 1 + summary.total_alerts);
}

#[test]
fn identical_runs_produce_byte_identical_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("activity_logs.csv");
    let events = generate_events(&GeneratorConfig { count: 25, seed: Some(7) });
    write_activity_log(&log, &events).unwrap();
    let policy = office_policy();

    run_scan(&log, &policy, dir.path());
    let first_table = fs::read(dir.path().join(TableSink::FILE_NAME)).unwrap();
    let first_summary = fs::read(dir.path().join("summary.json")).unwrap();

    run_scan(&log, &policy, dir.path());
    assert_eq!(fs::read(dir.path().join(TableSink::FILE_NAME)).unwrap(), first_table);
    assert_eq!(fs::read(dir.path().join("summary.json")).unwrap(), first_summary);
}

#[test]
fn summary_json_has_the_expected_keys() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("activity_logs.csv");
    let events = generate_events(&GeneratorConfig { count: 0, seed: Some(1) });
    write_activity_log(&log, &events).unwrap();

    run_scan(&log, &office_policy(), dir.path());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap())
            .unwrap();
    for key in ["total_alerts", "high", "medium", "low", "flagged_users"] {
        assert!(json.get(key).is_some(), "summary.json must carry `{key}`");
    }
    assert!(json["flagged_users"].is_array());
}
