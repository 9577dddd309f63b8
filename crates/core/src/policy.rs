use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Permission entry meaning "all resources are allowed for this role".
pub const WILDCARD: &str = "*";

/// Validation failures for an already-parsed policy document.
///
/// Fatal: the engine must not run with a partially valid policy.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// A working-hours bound is not a valid hour of day.
    #[error("`{field}` must be an hour in 0..24, got {value}")]
    HourOutOfRange {
        /// Name of the offending policy field.
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// `action_threshold` must be strictly positive.
    #[error("`action_threshold` must be a positive integer")]
    ZeroThreshold,
}

/// The configured thresholds and permission map governing rule behavior for
/// a run. Immutable for the duration of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// First hour of the working window, in `0..24`.
    pub work_start: u32,
    /// First hour past the working window, in `0..24`.
    pub work_end: u32,
    /// Per-user event count above which activity is flagged as excessive.
    pub action_threshold: u32,
    /// Allowed resources per role. [`WILDCARD`] grants everything; a role
    /// absent from the map has an implicit empty allowed set.
    pub role_permissions: HashMap<String, Vec<String>>,
}

impl Policy {
    /// Check the numeric bounds the schema cannot express.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for (field, value) in [("work_start", self.work_start), ("work_end", self.work_end)] {
            if value >= 24 {
                return Err(PolicyError::HourOutOfRange { field, value });
            }
        }
        if self.action_threshold == 0 {
            return Err(PolicyError::ZeroThreshold);
        }
        Ok(())
    }

    /// Whether `hour` falls inside the working window.
    ///
    /// When `work_start > work_end` the window wraps past midnight
    /// (overnight shift) and covers `[work_start, 24)` plus `[0, work_end)`.
    pub fn within_work_hours(&self, hour: u32) -> bool {
        if self.work_start <= self.work_end {
            hour >= self.work_start && hour < self.work_end
        } else {
            hour >= self.work_start || hour < self.work_end
        }
    }

    /// Whether `role` is allowed to touch `resource`.
    pub fn allows(&self, role: &str, resource: &str) -> bool {
        self.role_permissions
            .get(role)
            .map_or(false, |allowed| {
                allowed.iter().any(|entry| entry == WILDCARD || entry == resource)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(work_start: u32, work_end: u32) -> Policy {
        Policy {
            work_start,
            work_end,
            action_threshold: 2,
            role_permissions: HashMap::from([
                ("admin".to_owned(), vec![WILDCARD.to_owned()]),
                ("intern".to_owned(), vec!["public_docs".to_owned()]),
            ]),
        }
    }

    #[test]
    fn validate_rejects_bad_hours() {
        let mut p = policy(9, 17);
        p.work_end = 24;
        assert!(matches!(
            p.validate(),
            Err(PolicyError::HourOutOfRange { field: "work_end", value: 24 })
        ));
    }

    #[test]
    fn validate_rejects_zero_threshold() {
        let mut p = policy(9, 17);
        p.action_threshold = 0;
        assert!(matches!(p.validate(), Err(PolicyError::ZeroThreshold)));
    }

    #[test]
    fn day_window_is_half_open() {
        let p = policy(9, 17);
        assert!(!p.within_work_hours(8));
        assert!(p.within_work_hours(9));
        assert!(p.within_work_hours(16));
        assert!(!p.within_work_hours(17));
    }

    #[test]
    fn overnight_window_wraps_midnight() {
        let p = policy(22, 6);
        assert!(p.within_work_hours(23));
        assert!(p.within_work_hours(3));
        assert!(!p.within_work_hours(6));
        assert!(!p.within_work_hours(12));
    }

    #[test]
    fn wildcard_grants_everything() {
        let p = policy(9, 17);
        assert!(p.allows("admin", "payroll.zip"));
        assert!(p.allows("intern", "public_docs"));
        assert!(!p.allows("intern", "confidential_reports"));
    }

    #[test]
    fn unknown_role_has_empty_allowed_set() {
        let p = policy(9, 17);
        assert!(!p.allows("contractor", "public_docs"));
    }
}
