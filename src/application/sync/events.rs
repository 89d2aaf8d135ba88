//! Sync Event Port
//!
//! Progress reporting for a sync run. The console renders these as text,
//! `--json` renders them as NDJSON.

use std::path::PathBuf;

/// Event emitted during a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Deployment reference resolved
    Started { app_id: String },

    /// Locations the run will touch
    PathsResolved {
        backend_root: PathBuf,
        frontend_root: PathBuf,
        config_dir: PathBuf,
    },

    /// Generator about to run (or, in a dry run, would run)
    Generating {
        command: String,
        working_dir: PathBuf,
        dry_run: bool,
    },

    /// Generator finished and its output exists
    Generated { path: PathBuf },

    /// Output moved into place as the production variant
    Renamed {
        from: PathBuf,
        to: PathBuf,
        replaced: bool,
    },

    /// Frontend is a git checkout; the new file still needs committing
    CommitReminder {
        frontend_root: PathBuf,
        relative_file: PathBuf,
    },

    /// Run finished
    Completed {
        production_file: PathBuf,
        frontend_root: PathBuf,
        dry_run: bool,
    },
}

/// Trait for receiving sync events
pub trait SyncEventSink {
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
