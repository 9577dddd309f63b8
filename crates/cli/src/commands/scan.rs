use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use sentinel_core::RunSummary;
use sentinel_ingest::{load_policy, read_activity_log};
use sentinel_report::{
    ConsoleSink, RunLock, SUMMARY_FILE_NAME, SinkSet, TableSink, TranscriptSink,
    write_summary_json,
};
use sentinel_rules::RuleEngine;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Activity log to scan.
    #[arg(long, default_value = "logs/activity_logs.csv")]
    pub log: PathBuf,

    /// Policy document governing the run.
    #[arg(long, default_value = "config.json")]
    pub policy: PathBuf,

    /// Directory receiving alerts.log, alerts.csv and summary.json.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Skip the colored console mirror.
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: &ScanArgs) -> anyhow::Result<()> {
    // Fatal input problems surface here, before any artifact is reset.
    let policy = load_policy(&args.policy)?;
    let activity = read_activity_log(&args.log)?;

    let evaluation = RuleEngine::with_builtins().evaluate(&activity.events, &policy);
    let summary = RunSummary::from_alerts(
        &evaluation.alerts,
        activity.skipped.len(),
        evaluation.failures.len(),
    );

    fs::create_dir_all(&args.out)
        .with_context(|| format!("cannot create output directory {}", args.out.display()))?;
    let _lock = RunLock::acquire(&args.out)?;

    let mut sinks = SinkSet::new();
    sinks.push(TranscriptSink::create(args.out.join(TranscriptSink::FILE_NAME))?);
    sinks.push(TableSink::create(args.out.join(TableSink::FILE_NAME))?);
    if !args.quiet {
        sinks.push(ConsoleSink::stdout());
    }

    for alert in &evaluation.alerts {
        sinks.record(alert)?;
    }
    sinks.finish(&summary)?;
    write_summary_json(&args.out.join(SUMMARY_FILE_NAME), &summary)?;

    info!(
        total_alerts = summary.total_alerts,
        flagged_users = summary.flagged_users.len(),
        rows_skipped = summary.row_errors,
        rule_failures = summary.rule_errors,
        "scan complete"
    );
    Ok(())
}
