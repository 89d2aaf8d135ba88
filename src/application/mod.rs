//! Application Layer
//!
//! Use cases that orchestrate the flow between configuration, the generator
//! port and the filesystem.
//!
//! - `SyncUseCase` - resolve, generate, rename

pub mod sync;

pub use sync::{
    resolve_app_id, NoopEventSink, SyncEvent, SyncEventSink, SyncOptions, SyncOutcome, SyncPaths,
    SyncUseCase, APP_ID_ENV,
};
