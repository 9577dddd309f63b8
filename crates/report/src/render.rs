//! Shared plain-text rendering for the transcript and the console mirror.

use sentinel_core::{Alert, RunSummary};

pub(crate) const BLOCK_RULER: &str = "==============================";
const SUMMARY_HEADER: &str = "======== SUMMARY ========";
const SUMMARY_RULER: &str = "==========================";

/// Render one alert as the labeled block both human outputs share.
pub(crate) fn alert_block(alert: &Alert) -> Vec<String> {
    let mut lines = vec![
        BLOCK_RULER.to_owned(),
        "🚨 INSIDER THREAT ALERT 🚨".to_owned(),
        format!("Type: {}", alert.rule_name),
    ];
    for (label, value) in &alert.details {
        lines.push(format!("{label}: {value}"));
    }
    lines.push(format!("Severity: {}", alert.severity));
    lines.push(BLOCK_RULER.to_owned());
    lines
}

/// Render the terminal summary block.
///
/// Flagged users keep their first-appearance order so the block is
/// reproducible across identical runs.
pub(crate) fn summary_block(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        SUMMARY_HEADER.to_owned(),
        format!("Total Alerts: {}", summary.total_alerts),
        format!("HIGH: {}", summary.high),
        format!("MEDIUM: {}", summary.medium),
        format!("LOW: {}", summary.low),
        format!("Users Flagged: {}", summary.flagged_users.join(", ")),
    ];
    if summary.row_errors > 0 {
        lines.push(format!("Rows Skipped: {}", summary.row_errors));
    }
    if summary.rule_errors > 0 {
        lines.push(format!("Rule Failures: {}", summary.rule_errors));
    }
    lines.push(SUMMARY_RULER.to_owned());
    lines
}
