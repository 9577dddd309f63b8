use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One recorded user action from the activity log.
///
/// Events are immutable once read. The `action` field is carried for the
/// record but not evaluated by any current rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// When the action happened. Minute resolution, no timezone offset.
    pub timestamp: NaiveDateTime,
    /// Identifier of the acting user.
    pub user: String,
    /// Role the user held when acting.
    pub role: String,
    /// Resource the action touched.
    pub resource: String,
    /// The action performed (e.g. `login`, `read`, `download`).
    pub action: String,
}

impl ActivityEvent {
    /// Timestamp format used by the activity log and by alert detail lines.
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M";

    /// Render the timestamp in activity-log format.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(Self::TIMESTAMP_FORMAT).to_string()
    }
}
