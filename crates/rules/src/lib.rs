//! Detection rules and the rule evaluation engine.
//!
//! Evaluation runs in two phases. The per-event phase walks the activity
//! stream in order and applies every rule's [`Rule::evaluate_event`] hook;
//! the aggregate phase then applies each rule's [`Rule::finalize`] hook over
//! the state accumulated along the way. The engine is pure: it consumes
//! events and a policy and returns alerts, leaving all I/O to the caller.

pub mod builtins;
pub mod engine;
pub mod error;
pub mod rule;
pub mod state;

pub use builtins::{AccessControlRule, FrequencyRule, TimeWindowRule};
pub use engine::{Evaluation, RuleEngine, RuleFailure};
pub use error::RuleError;
pub use rule::Rule;
pub use state::EvalState;
