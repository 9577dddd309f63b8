use std::fmt;

use serde::{Deserialize, Serialize};

/// Operational urgency of an alert.
///
/// Totally ordered by urgency (`High > Medium > Low`). The ordering is used
/// for display and summary grouping only, never for alert suppression.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Aggregate indicators, worth a look.
    Low,
    /// Suspicious but explainable activity.
    Medium,
    /// Direct policy violation.
    High,
}

impl Severity {
    /// The upper-case label used in artifacts (`HIGH`, `MEDIUM`, `LOW`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
