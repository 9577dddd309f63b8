use indexmap::IndexMap;

use sentinel_core::ActivityEvent;

/// Summary statistics accumulated during the per-event phase and consumed by
/// aggregate rules in [`Rule::finalize`](crate::Rule::finalize).
///
/// Users are kept in first-seen order so aggregate alerts come out in a
/// stable, reproducible order.
#[derive(Debug, Default)]
pub struct EvalState {
    events_seen: usize,
    activity: IndexMap<String, usize>,
}

impl EvalState {
    /// Fold one event into the accumulated statistics.
    pub(crate) fn observe(&mut self, event: &ActivityEvent) {
        self.events_seen += 1;
        *self.activity.entry(event.user.clone()).or_insert(0) += 1;
    }

    /// Total number of events observed.
    pub fn events_seen(&self) -> usize {
        self.events_seen
    }

    /// Per-user event counts, in order of first appearance in the stream.
    pub fn user_activity(&self) -> impl Iterator<Item = (&str, usize)> {
        self.activity.iter().map(|(user, count)| (user.as_str(), *count))
    }

    /// Event count for one user.
    pub fn count_for(&self, user: &str) -> usize {
        self.activity.get(user).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn event(user: &str) -> ActivityEvent {
        ActivityEvent {
            timestamp: NaiveDateTime::parse_from_str(
                "2026-01-10 10:00",
                ActivityEvent::TIMESTAMP_FORMAT,
            )
            .unwrap(),
            user: user.into(),
            role: "employee".into(),
            resource: "project_docs".into(),
            action: "read".into(),
        }
    }

    #[test]
    fn counts_per_user_in_first_seen_order() {
        let mut state = EvalState::default();
        for user in ["emp02", "emp01", "emp02", "emp03", "emp02"] {
            state.observe(&event(user));
        }

        assert_eq!(state.events_seen(), 5);
        assert_eq!(state.count_for("emp02"), 3);
        assert_eq!(state.count_for("unknown"), 0);

        let order: Vec<&str> = state.user_activity().map(|(user, _)| user).collect();
        assert_eq!(order, ["emp02", "emp01", "emp03"]);
    }
}
