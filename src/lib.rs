//! ampsync - production Amplify config synchronizer
//!
//! Runs the Amplify CLI output generator against a deployed backend and moves
//! the generated Dart file into place as the frontend's production config.

pub mod application;
pub mod config;
pub mod error;
pub mod generator;

// Re-exports for convenience
pub use application::{
    resolve_app_id, SyncEvent, SyncEventSink, SyncOptions, SyncOutcome, SyncUseCase, APP_ID_ENV,
};
pub use config::{Config, Verbosity};
pub use error::{SyncError, SyncResult};
pub use generator::{Generator, GeneratorRequest, ProcessGenerator};
