//! Sync Result

use std::path::PathBuf;

/// Outcome of a successful sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub app_id: String,
    /// Command line the generator was (or would have been) run with
    pub command: String,
    pub production_file: PathBuf,
    /// A stale production file was overwritten
    pub replaced_existing: bool,
    /// The frontend is a git checkout and a commit reminder was emitted
    pub commit_reminder: bool,
    pub dry_run: bool,
}

impl SyncOutcome {
    pub fn has_changes(&self) -> bool {
        !self.dry_run
    }
}
