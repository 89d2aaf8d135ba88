//! NDJSON event stream for `--json`.
//!
//! One object per line; the `event` key always comes first.

use std::io::{self, Write};
use std::path::Path;

use ampsync::SyncEvent;
use serde::{Serialize, Serializer};

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JsonEvent<'a> {
    Started {
        app_id: &'a str,
    },
    PathsResolved {
        #[serde(serialize_with = "lossy_path")]
        backend_root: &'a Path,
        #[serde(serialize_with = "lossy_path")]
        frontend_root: &'a Path,
        #[serde(serialize_with = "lossy_path")]
        config_dir: &'a Path,
    },
    Generating {
        command: &'a str,
        dry_run: bool,
    },
    Generated {
        #[serde(serialize_with = "lossy_path")]
        path: &'a Path,
    },
    Renamed {
        #[serde(serialize_with = "lossy_path")]
        from: &'a Path,
        #[serde(serialize_with = "lossy_path")]
        to: &'a Path,
        replaced: bool,
    },
    CommitReminder {
        #[serde(serialize_with = "lossy_path")]
        frontend_root: &'a Path,
        #[serde(serialize_with = "lossy_path")]
        file: &'a Path,
    },
    Completed {
        #[serde(serialize_with = "lossy_path")]
        production_file: &'a Path,
        dry_run: bool,
    },
    Warning {
        message: &'a str,
    },
    Error {
        code: &'a str,
        message: String,
    },
}

impl<'a> From<&'a SyncEvent> for JsonEvent<'a> {
    fn from(event: &'a SyncEvent) -> Self {
        match event {
            SyncEvent::Started { app_id } => JsonEvent::Started { app_id },
            SyncEvent::PathsResolved {
                backend_root,
                frontend_root,
                config_dir,
            } => JsonEvent::PathsResolved {
                backend_root,
                frontend_root,
                config_dir,
            },
            SyncEvent::Generating {
                command, dry_run, ..
            } => JsonEvent::Generating {
                command,
                dry_run: *dry_run,
            },
            SyncEvent::Generated { path } => JsonEvent::Generated { path },
            SyncEvent::Renamed { from, to, replaced } => JsonEvent::Renamed {
                from,
                to,
                replaced: *replaced,
            },
            SyncEvent::CommitReminder {
                frontend_root,
                relative_file,
            } => JsonEvent::CommitReminder {
                frontend_root,
                file: relative_file,
            },
            SyncEvent::Completed {
                production_file,
                dry_run,
                ..
            } => JsonEvent::Completed {
                production_file,
                dry_run: *dry_run,
            },
        }
    }
}

/// Paths that are not valid UTF-8 are written lossily rather than rejected
fn lossy_path<S: Serializer>(path: &&Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&path.display())
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &JsonEvent<'_>) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &JsonEvent<'_>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
