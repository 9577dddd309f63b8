use sentinel_core::{Alert, Policy, Severity};

use crate::error::RuleError;
use crate::rule::Rule;
use crate::state::EvalState;

/// Flags users whose total event count exceeds the policy threshold.
///
/// Aggregate rule: fires at most once per user, after the whole stream has
/// been observed, carrying the exact count.
pub struct FrequencyRule;

impl Rule for FrequencyRule {
    fn name(&self) -> &'static str {
        "Excessive User Activity"
    }

    fn finalize(&self, state: &EvalState, policy: &Policy) -> Result<Vec<Alert>, RuleError> {
        let threshold = policy.action_threshold as usize;
        let alerts = state
            .user_activity()
            .filter(|&(_, count)| count > threshold)
            .map(|(user, count)| {
                Alert::new(self.name(), Severity::Low, user)
                    .with_detail("User", user)
                    .with_detail("Actions", count.to_string())
            })
            .collect();
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDateTime;

    use sentinel_core::ActivityEvent;

    use super::*;

    fn policy(action_threshold: u32) -> Policy {
        Policy {
            work_start: 9,
            work_end: 17,
            action_threshold,
            role_permissions: HashMap::new(),
        }
    }

    fn observe(state: &mut EvalState, user: &str, times: usize) {
        let event = ActivityEvent {
            timestamp: NaiveDateTime::parse_from_str(
                "2026-01-10 10:00",
                ActivityEvent::TIMESTAMP_FORMAT,
            )
            .unwrap(),
            user: user.into(),
            role: "employee".into(),
            resource: "project_docs".into(),
            action: "read".into(),
        };
        for _ in 0..times {
            state.observe(&event);
        }
    }

    #[test]
    fn fires_only_strictly_above_threshold() {
        let mut state = EvalState::default();
        observe(&mut state, "at_threshold", 2);
        observe(&mut state, "over_threshold", 3);

        let alerts = FrequencyRule.finalize(&state, &policy(2)).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].user, "over_threshold");
        assert_eq!(alerts[0].severity, Severity::Low);
        assert_eq!(alerts[0].details["Actions"], "3");
    }

    #[test]
    fn alerts_come_out_in_first_seen_order() {
        let mut state = EvalState::default();
        observe(&mut state, "second", 1);
        observe(&mut state, "first", 5);
        observe(&mut state, "second", 4);

        let alerts = FrequencyRule.finalize(&state, &policy(2)).unwrap();
        let users: Vec<&str> = alerts.iter().map(|a| a.user.as_str()).collect();
        assert_eq!(users, ["second", "first"]);
    }

    #[test]
    fn quiet_stream_produces_nothing() {
        let state = EvalState::default();
        assert!(FrequencyRule.finalize(&state, &policy(2)).unwrap().is_empty());
    }
}
