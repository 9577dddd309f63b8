use sentinel_core::{ActivityEvent, Alert, Policy, Severity};

use crate::error::RuleError;
use crate::rule::Rule;

/// Flags access to a resource the acting role is not permitted to touch.
///
/// A role absent from the policy has an implicit empty allowed set, so every
/// access under an unknown role is a violation.
pub struct AccessControlRule;

impl Rule for AccessControlRule {
    fn name(&self) -> &'static str {
        "Role-Based Access Violation"
    }

    fn evaluate_event(
        &self,
        event: &ActivityEvent,
        policy: &Policy,
    ) -> Result<Option<Alert>, RuleError> {
        if event.user.is_empty() {
            return Err(RuleError::MissingField("user"));
        }
        if event.resource.is_empty() {
            return Err(RuleError::MissingField("resource"));
        }
        if policy.allows(&event.role, &event.resource) {
            return Ok(None);
        }

        let time = event.timestamp_string();
        Ok(Some(
            Alert::new(self.name(), Severity::High, &event.user)
                .with_resource(&event.resource)
                .with_timestamp(&time)
                .with_detail("User", &event.user)
                .with_detail("Role", &event.role)
                .with_detail("Resource", &event.resource)
                .with_detail("Time", &time),
        ))
    }
}
