//! The built-in detection rules.

mod access_control;
mod frequency;
mod time_window;

pub use access_control::AccessControlRule;
pub use frequency::FrequencyRule;
pub use time_window::TimeWindowRule;
