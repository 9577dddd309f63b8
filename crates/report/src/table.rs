use std::fs::File;
use std::path::PathBuf;

use sentinel_core::{Alert, RunSummary};

use crate::error::SinkError;
use crate::sink::AlertSink;

/// Header of the structured alert table.
const COLUMNS: [&str; 5] = ["alert_type", "severity", "user", "resource", "time"];

/// Structured tabular artifact: one CSV row per alert, fixed column set.
///
/// Detail attributes beyond the five columns are surfaced only in the human
/// transcript. The file is truncated and re-headered on construction.
pub struct TableSink {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl TableSink {
    /// Conventional artifact name inside an output directory.
    pub const FILE_NAME: &'static str = "alerts.csv";

    /// Create (truncating) the table and write its header row.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(COLUMNS).map_err(|source| SinkError::Csv {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, writer })
    }

    fn csv_err(&self, source: csv::Error) -> SinkError {
        SinkError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl AlertSink for TableSink {
    fn record(&mut self, alert: &Alert) -> Result<(), SinkError> {
        let record = [
            alert.rule_name.as_str(),
            alert.severity.as_str(),
            alert.user.as_str(),
            alert.resource.as_deref().unwrap_or(""),
            alert.timestamp.as_deref().unwrap_or(""),
        ];
        self.writer
            .write_record(record)
            .map_err(|source| self.csv_err(source))
    }

    fn finish(&mut self, _summary: &RunSummary) -> Result<(), SinkError> {
        self.writer.flush().map_err(|source| SinkError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
