use std::fs;
use std::path::Path;

use sentinel_core::RunSummary;

use crate::error::SinkError;

/// Conventional name of the structured summary artifact.
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// Write the structured summary record, overwriting any previous run's.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<(), SinkError> {
    let json = serde_json::to_string_pretty(summary).map_err(|source| SinkError::Io {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    fs::write(path, json + "\n").map_err(|source| SinkError::Io {
        path: path.to_path_buf(),
        source,
    })
}
