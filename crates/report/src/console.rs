use std::io::{self, Write};

use tracing::warn;

use sentinel_core::{Alert, RunSummary, Severity};

use crate::error::SinkError;
use crate::render::{alert_block, summary_block};
use crate::sink::AlertSink;

const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const GREEN: &str = "\x1b[92m";
const RESET: &str = "\x1b[0m";

/// Severity-to-color mapping. Lives here so severity itself stays a pure
/// value and presentation never leaks into rule logic.
fn color_for(severity: Severity) -> &'static str {
    match severity {
        Severity::High => RED,
        Severity::Medium => YELLOW,
        Severity::Low => GREEN,
    }
}

/// Best-effort mirror of the transcript on the operational console,
/// color-keyed by severity for visual triage.
///
/// Write failures are logged and swallowed: losing the mirror must not
/// fail the run.
pub struct ConsoleSink<W = io::Stdout> {
    out: W,
}

impl ConsoleSink {
    /// Mirror to stdout.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Mirror into an arbitrary writer.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    fn print(&mut self, lines: &[String], color: Option<&str>) {
        let mut text = String::new();
        for line in lines {
            match color {
                Some(color) => {
                    text.push_str(color);
                    text.push_str(line);
                    text.push_str(RESET);
                }
                None => text.push_str(line),
            }
            text.push('\n');
        }
        text.push('\n');
        if let Err(error) = self.out.write_all(text.as_bytes()) {
            warn!(%error, "console mirror write failed");
        }
    }
}

impl<W: Write> AlertSink for ConsoleSink<W> {
    fn record(&mut self, alert: &Alert) -> Result<(), SinkError> {
        self.print(&alert_block(alert), Some(color_for(alert.severity)));
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<(), SinkError> {
        self.print(&summary_block(summary), None);
        Ok(())
    }
}
