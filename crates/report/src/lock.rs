use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::SinkError;

/// Run-scoped exclusive ownership of an output directory.
///
/// Exactly one run may own a set of output artifacts at a time. The lock
/// file is created with `create_new`, so a second run against the same
/// directory fails fast with [`SinkError::OutputBusy`] before touching any
/// artifact, instead of silently interleaving writes. Released on drop.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    /// Name of the lock file inside the output directory.
    pub const FILE_NAME: &'static str = ".sentinel.lock";

    /// Acquire the lock for `dir`, failing fast if another run holds it.
    pub fn acquire(dir: &Path) -> Result<Self, SinkError> {
        let path = dir.join(Self::FILE_NAME);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                // The owning pid helps diagnose a stale lock by hand.
                let _ = writeln!(file, "{}", std::process::id());
                Ok(Self { path })
            }
            Err(source) if source.kind() == ErrorKind::AlreadyExists => {
                Err(SinkError::OutputBusy { path })
            }
            Err(source) => Err(SinkError::Io { path, source }),
        }
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(error) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), %error, "failed to release run lock");
        }
    }
}
