use std::path::PathBuf;

/// Failures while writing a synthetic activity log.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The output file could not be written.
    #[error("cannot write {path}: {source}")]
    Io {
        /// Path of the output log.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV writer rejected a row.
    #[error("cannot write {path}: {source}")]
    Csv {
        /// Path of the output log.
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
