use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::alert::Alert;
use crate::severity::Severity;

/// The aggregate record of one run's alert counts and flagged users.
///
/// Derived entirely from the run's alert sequence, recomputed from scratch
/// each run. Never updated by side effect during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of alerts produced, equal to the sum of the severity counts.
    pub total_alerts: usize,
    /// HIGH severity alerts.
    pub high: usize,
    /// MEDIUM severity alerts.
    pub medium: usize,
    /// LOW severity alerts.
    pub low: usize,
    /// Users appearing in at least one alert, in order of first appearance.
    pub flagged_users: Vec<String>,
    /// Activity-log rows that failed to parse and were skipped.
    #[serde(default)]
    pub row_errors: usize,
    /// Rule evaluations that failed and were recovered.
    #[serde(default)]
    pub rule_errors: usize,
}

impl RunSummary {
    /// Build a summary from the full alert sequence of a run.
    ///
    /// The error counts come from the ingest and evaluation stages; they are
    /// reported alongside the alert tallies but never counted as alerts.
    pub fn from_alerts(alerts: &[Alert], row_errors: usize, rule_errors: usize) -> Self {
        let mut summary = Self {
            total_alerts: alerts.len(),
            row_errors,
            rule_errors,
            ..Self::default()
        };

        let mut flagged: IndexSet<&str> = IndexSet::new();
        for alert in alerts {
            match alert.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            flagged.insert(alert.user.as_str());
        }
        summary.flagged_users = flagged.into_iter().map(str::to_owned).collect();
        summary
    }

    /// Alert count for one severity.
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}
