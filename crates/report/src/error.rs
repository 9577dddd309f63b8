use std::path::PathBuf;

/// Failures while producing an output artifact.
///
/// Fatal for the artifact concerned; independent artifacts are still
/// driven. Carries the artifact identity so the caller can diagnose
/// without retry logic.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The artifact could not be written.
    #[error("cannot write {path}: {source}")]
    Io {
        /// Path of the artifact.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tabular artifact rejected a record.
    #[error("cannot write {path}: {source}")]
    Csv {
        /// Path of the artifact.
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Another run currently owns the output directory.
    #[error("output locked by another run: {path}")]
    OutputBusy {
        /// Path of the lock file.
        path: PathBuf,
    },
}
