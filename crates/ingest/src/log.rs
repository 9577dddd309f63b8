use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use tracing::warn;

use sentinel_core::ActivityEvent;

use crate::error::{IngestError, RowError};

/// Columns the activity log must declare in its header, in any order.
const REQUIRED_COLUMNS: [&str; 5] = ["timestamp", "user", "role", "resource", "action"];

/// The parsed activity log: well-formed events in stream order plus the
/// rows that had to be skipped.
#[derive(Debug)]
pub struct ActivityLog {
    /// Events in the order they appear in the log.
    pub events: Vec<ActivityEvent>,
    /// Rows skipped during parsing, for the summary's error count.
    pub skipped: Vec<RowError>,
}

/// Positions of the required columns within the header.
struct ColumnIndex {
    timestamp: usize,
    user: usize,
    role: usize,
    resource: usize,
    action: usize,
}

impl ColumnIndex {
    fn resolve(path: &Path, headers: &StringRecord) -> Result<Self, IngestError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| IngestError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };
        Ok(Self {
            timestamp: find(REQUIRED_COLUMNS[0])?,
            user: find(REQUIRED_COLUMNS[1])?,
            role: find(REQUIRED_COLUMNS[2])?,
            resource: find(REQUIRED_COLUMNS[3])?,
            action: find(REQUIRED_COLUMNS[4])?,
        })
    }

    fn field<'r>(&self, record: &'r StringRecord, index: usize) -> &'r str {
        record.get(index).unwrap_or("")
    }
}

/// Read an activity log from `path`.
///
/// Missing required columns are fatal. A row with a malformed timestamp or
/// an undecodable shape is skipped and recorded in [`ActivityLog::skipped`];
/// all other rows still produce events.
pub fn read_activity_log(path: &Path) -> Result<ActivityLog, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let columns = ColumnIndex::resolve(path, &headers)?;

    let mut events = Vec::new();
    let mut skipped = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = index as u64 + 1;
        let record = match record {
            Ok(record) => record,
            Err(source) => {
                warn!(row, %source, "skipping undecodable activity row");
                skipped.push(RowError::Malformed { row, source });
                continue;
            }
        };

        let raw_timestamp = columns.field(&record, columns.timestamp);
        let timestamp = match NaiveDateTime::parse_from_str(
            raw_timestamp,
            ActivityEvent::TIMESTAMP_FORMAT,
        ) {
            Ok(timestamp) => timestamp,
            Err(_) => {
                warn!(row, timestamp = raw_timestamp, "skipping row with bad timestamp");
                skipped.push(RowError::BadTimestamp {
                    row,
                    value: raw_timestamp.to_owned(),
                });
                continue;
            }
        };

        events.push(ActivityEvent {
            timestamp,
            user: columns.field(&record, columns.user).to_owned(),
            role: columns.field(&record, columns.role).to_owned(),
            resource: columns.field(&record, columns.resource).to_owned(),
            action: columns.field(&record, columns.action).to_owned(),
        });
    }

    Ok(ActivityLog { events, skipped })
}
