use std::path::PathBuf;

use sentinel_core::PolicyError;

/// Fatal ingest failures. No partial detection is attempted past these.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The source file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The activity log header could not be parsed.
    #[error("cannot parse {path}: {source}")]
    Csv {
        /// Path of the unparseable file.
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The activity log header lacks a required column.
    #[error("activity log {path} is missing required column `{column}`")]
    MissingColumn {
        /// Path of the offending log.
        path: PathBuf,
        /// The absent column.
        column: &'static str,
    },

    /// The policy document is not valid JSON for the policy schema.
    #[error("policy {path}: {source}")]
    PolicyParse {
        /// Path of the policy document.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The policy document parsed but failed validation.
    #[error("policy {path}: {source}")]
    PolicyInvalid {
        /// Path of the policy document.
        path: PathBuf,
        #[source]
        source: PolicyError,
    },
}

/// A single activity-log row that could not be parsed.
///
/// Non-fatal: the row is skipped, counted, and reported in the run summary
/// while evaluation continues for every other row.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    /// The timestamp column did not match the log format.
    #[error("row {row}: bad timestamp `{value}`")]
    BadTimestamp {
        /// 1-based data row number (the header is row 0).
        row: u64,
        /// The rejected timestamp text.
        value: String,
    },

    /// The row itself could not be decoded (wrong field count, bad quoting).
    #[error("row {row}: {source}")]
    Malformed {
        /// 1-based data row number (the header is row 0).
        row: u64,
        #[source]
        source: csv::Error,
    },
}
