use sentinel_core::{ActivityEvent, Alert, Policy};

use crate::error::RuleError;
use crate::state::EvalState;

/// Capability set implemented by every detection rule.
///
/// `evaluate_event` runs once per event during the per-event phase;
/// `finalize` runs once after the whole stream during the aggregate phase.
/// Both hooks have do-nothing defaults, so a rule implements whichever side
/// it needs and new rule types slot in without touching engine control flow.
pub trait Rule {
    /// Stable rule name, used as the alert type and in failure reports.
    fn name(&self) -> &'static str;

    /// Decide whether a single event triggers an alert.
    fn evaluate_event(
        &self,
        _event: &ActivityEvent,
        _policy: &Policy,
    ) -> Result<Option<Alert>, RuleError> {
        Ok(None)
    }

    /// Produce alerts from state accumulated across the whole stream.
    fn finalize(&self, _state: &EvalState, _policy: &Policy) -> Result<Vec<Alert>, RuleError> {
        Ok(Vec::new())
    }
}
