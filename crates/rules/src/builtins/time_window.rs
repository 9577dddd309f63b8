use chrono::Timelike;

use sentinel_core::{ActivityEvent, Alert, Policy, Severity};

use crate::error::RuleError;
use crate::rule::Rule;

/// Flags activity outside the configured working window.
///
/// Windows with `work_start > work_end` wrap past midnight, so overnight
/// shifts are handled rather than silently flagging the whole night.
pub struct TimeWindowRule;

impl Rule for TimeWindowRule {
    fn name(&self) -> &'static str {
        "Access Outside Working Hours"
    }

    fn evaluate_event(
        &self,
        event: &ActivityEvent,
        policy: &Policy,
    ) -> Result<Option<Alert>, RuleError> {
        if event.user.is_empty() {
            return Err(RuleError::MissingField("user"));
        }
        if policy.within_work_hours(event.timestamp.hour()) {
            return Ok(None);
        }

        let time = event.timestamp_string();
        Ok(Some(
            Alert::new(self.name(), Severity::Medium, &event.user)
                .with_timestamp(&time)
                .with_detail("User", &event.user)
                .with_detail("Time", &time),
        ))
    }
}
