//! Error types for ampsync
//!
//! Library code returns `SyncError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for ampsync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for ampsync operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// Neither `AMPLIFY_APP_ID` nor the positional argument named an app
    #[error("Amplify App ID required")]
    MissingIdentifier,

    /// Frontend project directory does not exist
    #[error("frontend directory not found at {path}")]
    MissingTarget { path: PathBuf },

    /// Generator exited cleanly but left no output file behind
    #[error("config file was not generated: {path}")]
    GenerationIncomplete { path: PathBuf },

    /// Generator process could not be started
    #[error("failed to start '{program}'")]
    GeneratorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Generator process ran and reported failure
    #[error("generator exited with {status}")]
    GeneratorFailed { status: ExitStatus },

    /// Generated file could not be moved over the production file
    #[error("failed to rename {from} to {to}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Stable machine-readable code for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            SyncError::MissingIdentifier => "missing_identifier",
            SyncError::MissingTarget { .. } => "missing_target",
            SyncError::GenerationIncomplete { .. } => "generation_incomplete",
            SyncError::GeneratorSpawn { .. } => "generator_spawn",
            SyncError::GeneratorFailed { .. } => "generator_failed",
            SyncError::Rename { .. } => "rename",
            SyncError::Config { .. } => "config",
            SyncError::Io(_) => "io",
        }
    }
}
