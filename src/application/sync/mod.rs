//! Sync Module
//!
//! Regenerates the frontend's production config from a deployed backend.
//!
//! ## Structure
//!
//! - `options` - Inputs (`SyncOptions`) and deployment reference resolution
//! - `events` - Progress events (`SyncEvent`, `SyncEventSink`)
//! - `result` - Outcome of a successful run (`SyncOutcome`)
//! - `use_case` - The orchestration itself (`SyncUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use ampsync::application::sync::{SyncOptions, SyncUseCase};
//! use ampsync::generator::ProcessGenerator;
//!
//! let use_case = SyncUseCase::new(ProcessGenerator::from_config(&config.generator));
//! let outcome = use_case.execute(&SyncOptions::from_config(&config, backend_root, app_id))?;
//! ```

mod events;
mod options;
mod result;
mod use_case;

pub use events::{NoopEventSink, SyncEvent, SyncEventSink};
pub use options::{resolve_app_id, SyncOptions, SyncPaths, APP_ID_ENV};
pub use result::SyncOutcome;
pub use use_case::SyncUseCase;

#[cfg(test)]
mod tests;
