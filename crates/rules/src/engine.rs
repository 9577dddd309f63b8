use tracing::{debug, warn};

use sentinel_core::{ActivityEvent, Alert, Policy};

use crate::builtins::{AccessControlRule, FrequencyRule, TimeWindowRule};
use crate::error::RuleError;
use crate::rule::Rule;
use crate::state::EvalState;

/// A rule evaluation that failed and was recovered.
///
/// Carries enough context to diagnose the failure without re-running: the
/// rule name and, for per-event failures, the offending event.
#[derive(Debug)]
pub struct RuleFailure {
    /// Name of the rule that failed.
    pub rule: &'static str,
    /// The event under evaluation; `None` for aggregate-phase failures.
    pub event: Option<ActivityEvent>,
    /// What went wrong.
    pub error: RuleError,
}

/// Output of one engine run: alerts in production order, plus the rule
/// failures recovered along the way. Failures are collected separately so a
/// malformed event neither vanishes nor aborts detection for the rest of
/// the stream.
#[derive(Debug, Default)]
pub struct Evaluation {
    /// Alerts in the order they were produced.
    pub alerts: Vec<Alert>,
    /// Recovered per-rule evaluation failures.
    pub failures: Vec<RuleFailure>,
}

/// Drives two-phase rule evaluation over an activity stream.
///
/// Phase 1 walks events in stream order, applying every rule's
/// `evaluate_event` hook in registration order; multiple rules may each fire
/// on the same event. Phase 2 applies each rule's `finalize` hook over the
/// accumulated [`EvalState`]. Identical inputs produce an identical alert
/// sequence, content and order.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create an engine with an explicit rule set, evaluated in the given
    /// order.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Engine with the built-in rules in their fixed order: time window,
    /// access control, frequency.
    pub fn with_builtins() -> Self {
        Self::new(vec![
            Box::new(TimeWindowRule),
            Box::new(AccessControlRule),
            Box::new(FrequencyRule),
        ])
    }

    /// Names of the registered rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Evaluate the whole stream against the policy.
    pub fn evaluate(&self, events: &[ActivityEvent], policy: &Policy) -> Evaluation {
        let mut state = EvalState::default();
        let mut out = Evaluation::default();

        for event in events {
            state.observe(event);
            for rule in &self.rules {
                match rule.evaluate_event(event, policy) {
                    Ok(Some(alert)) => {
                        debug!(rule = rule.name(), user = %alert.user, "rule fired");
                        out.alerts.push(alert);
                    }
                    Ok(None) => {}
                    Err(error) => {
                        warn!(rule = rule.name(), %error, "rule failed on event");
                        out.failures.push(RuleFailure {
                            rule: rule.name(),
                            event: Some(event.clone()),
                            error,
                        });
                    }
                }
            }
        }

        for rule in &self.rules {
            match rule.finalize(&state, policy) {
                Ok(alerts) => {
                    for alert in alerts {
                        debug!(rule = rule.name(), user = %alert.user, "rule fired on finalize");
                        out.alerts.push(alert);
                    }
                }
                Err(error) => {
                    warn!(rule = rule.name(), %error, "rule failed on finalize");
                    out.failures.push(RuleFailure {
                        rule: rule.name(),
                        event: None,
                        error,
                    });
                }
            }
        }

        out
    }
}
