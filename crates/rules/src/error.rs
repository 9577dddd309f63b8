/// Errors raised by a rule that cannot evaluate its input.
///
/// These never abort a run; the engine collects them next to the alert
/// stream so malformed events neither vanish nor stop detection for the
/// rest of the stream.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A field the rule depends on was missing or empty.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}
