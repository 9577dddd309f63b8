//! Synthetic activity-log generation.
//!
//! Produces a day of plausible user activity plus a handful of injected
//! suspicious rows, so the detector always has something to find. The
//! output goes through the same CSV schema `sentinel-ingest` reads, which
//! also makes this crate the test harness for end-to-end runs.

pub mod error;
pub mod generator;

pub use error::GeneratorError;
pub use generator::{GeneratorConfig, generate_events, write_activity_log};
