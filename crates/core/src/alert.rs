use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One detected policy violation, classified by type and severity.
///
/// Produced once per rule trigger and never mutated afterwards. The `user`,
/// `resource` and `timestamp` fields feed the tabular artifact; `details`
/// carries the full rule-specific labels rendered in the human transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Name of the rule type that fired (e.g. `Role-Based Access Violation`).
    pub rule_name: String,
    /// Operational urgency.
    pub severity: Severity,
    /// The user this alert is about.
    pub user: String,
    /// Resource involved, when the rule has one.
    #[serde(default)]
    pub resource: Option<String>,
    /// Event time in activity-log format, when the rule has one.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Rule-specific detail, label to value, in the order the rule wrote it.
    #[serde(default)]
    pub details: IndexMap<String, String>,
}

impl Alert {
    /// Create an alert with the required fields.
    pub fn new(
        rule_name: impl Into<String>,
        severity: Severity,
        user: impl Into<String>,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            severity,
            user: user.into(),
            resource: None,
            timestamp: None,
            details: IndexMap::new(),
        }
    }

    /// Attach the resource involved.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Attach the event time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Append a detail line. Insertion order is preserved in the transcript.
    #[must_use]
    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(label.into(), value.into());
        self
    }
}
