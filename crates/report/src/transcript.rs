use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use sentinel_core::{Alert, RunSummary};

use crate::error::SinkError;
use crate::render::{alert_block, summary_block};
use crate::sink::AlertSink;

/// Human-readable transcript of the run.
///
/// The file is truncated and re-headered on construction, before any alert
/// is recorded. Alerts render as delimited blocks separated by blank lines;
/// `finish` appends the summary block.
pub struct TranscriptSink {
    path: PathBuf,
    file: File,
}

impl TranscriptSink {
    /// Conventional artifact name inside an output directory.
    pub const FILE_NAME: &'static str = "alerts.log";

    /// Create (truncating) the transcript and write its header.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        let mut file = File::create(&path).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        file.write_all(b"==== INSIDER THREAT ALERT LOG ====\n\n")
            .map_err(|source| SinkError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, file })
    }

    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        self.file
            .write_all(text.as_bytes())
            .map_err(|source| SinkError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

impl AlertSink for TranscriptSink {
    fn record(&mut self, alert: &Alert) -> Result<(), SinkError> {
        let mut text = alert_block(alert).join("\n");
        text.push_str("\n\n");
        self.write(&text)
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<(), SinkError> {
        let mut text = summary_block(summary).join("\n");
        text.push('\n');
        self.write(&text)
    }
}
