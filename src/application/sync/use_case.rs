//! Sync Use Case
//!
//! 1. Require a deployment reference
//! 2. Require the frontend directory
//! 3. Run the generator into the frontend config directory
//! 4. Require the generated file
//! 5. Rename it to the production file name
//!
//! Nothing is retried or rolled back; a failed run is recovered by running
//! again.

use std::fs;

use crate::error::{SyncError, SyncResult};
use crate::generator::{Generator, GeneratorRequest};

use super::events::{NoopEventSink, SyncEvent, SyncEventSink};
use super::options::SyncOptions;
use super::result::SyncOutcome;

/// Sync use case, parameterized by the generator port
pub struct SyncUseCase<G: Generator> {
    generator: G,
}

impl<G: Generator> SyncUseCase<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Execute without progress reporting
    pub fn execute(&self, options: &SyncOptions) -> SyncResult<SyncOutcome> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute, reporting each stage to `events`
    pub fn execute_with_events(
        &self,
        options: &SyncOptions,
        events: &dyn SyncEventSink,
    ) -> SyncResult<SyncOutcome> {
        let app_id = options
            .app_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .ok_or(SyncError::MissingIdentifier)?;

        events.on_event(SyncEvent::Started {
            app_id: app_id.clone(),
        });

        let paths = options.paths();
        events.on_event(SyncEvent::PathsResolved {
            backend_root: options.backend_root.clone(),
            frontend_root: paths.frontend_root.clone(),
            config_dir: paths.config_dir.clone(),
        });

        if !paths.frontend_root.is_dir() {
            return Err(SyncError::MissingTarget {
                path: paths.frontend_root,
            });
        }

        let request = GeneratorRequest {
            app_id: app_id.clone(),
            branch: options.branch.clone(),
            format: options.format.clone(),
            out_dir: paths.config_dir.clone(),
            working_dir: options.backend_root.clone(),
        };
        let command = self.generator.describe(&request);

        events.on_event(SyncEvent::Generating {
            command: command.clone(),
            working_dir: request.working_dir.clone(),
            dry_run: options.dry_run,
        });

        if options.dry_run {
            events.on_event(SyncEvent::Completed {
                production_file: paths.production_file.clone(),
                frontend_root: paths.frontend_root.clone(),
                dry_run: true,
            });
            return Ok(SyncOutcome {
                app_id,
                command,
                production_file: paths.production_file,
                replaced_existing: false,
                commit_reminder: false,
                dry_run: true,
            });
        }

        self.generator.generate(&request)?;

        if !paths.generated_file.is_file() {
            return Err(SyncError::GenerationIncomplete {
                path: paths.generated_file,
            });
        }
        events.on_event(SyncEvent::Generated {
            path: paths.generated_file.clone(),
        });

        let replaced_existing = paths.production_file.exists();
        fs::rename(&paths.generated_file, &paths.production_file).map_err(|source| {
            SyncError::Rename {
                from: paths.generated_file.clone(),
                to: paths.production_file.clone(),
                source,
            }
        })?;
        events.on_event(SyncEvent::Renamed {
            from: paths.generated_file.clone(),
            to: paths.production_file.clone(),
            replaced: replaced_existing,
        });

        let commit_reminder = paths.has_git();
        if commit_reminder {
            events.on_event(SyncEvent::CommitReminder {
                frontend_root: paths.frontend_root.clone(),
                relative_file: paths.production_relative.clone(),
            });
        }

        events.on_event(SyncEvent::Completed {
            production_file: paths.production_file.clone(),
            frontend_root: paths.frontend_root.clone(),
            dry_run: false,
        });

        Ok(SyncOutcome {
            app_id,
            command,
            production_file: paths.production_file,
            replaced_existing,
            commit_reminder,
            dry_run: false,
        })
    }
}
