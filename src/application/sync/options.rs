//! Sync Options
//!
//! Inputs for a sync run and the paths derived from them.

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Environment variable holding the deployment reference
pub const APP_ID_ENV: &str = "AMPLIFY_APP_ID";

/// Pick the deployment reference: environment first, then the positional argument.
///
/// Values are trimmed; an empty value counts as absent.
pub fn resolve_app_id(env_value: Option<&str>, arg_value: Option<&str>) -> Option<String> {
    [env_value, arg_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(String::from)
}

/// Options for the sync use case
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Deployment reference; `None` fails the run with `MissingIdentifier`
    pub app_id: Option<String>,
    /// Working directory for the generator
    pub backend_root: PathBuf,
    /// Frontend project root; must exist before anything runs
    pub frontend_root: PathBuf,
    /// Config directory, relative to the frontend root
    pub config_subdir: PathBuf,
    pub generated_file: String,
    pub production_file: String,
    pub branch: String,
    pub format: String,
    /// Plan only: no generator, no rename
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn from_config(
        config: &Config,
        backend_root: impl Into<PathBuf>,
        app_id: Option<String>,
    ) -> Self {
        let backend_root = backend_root.into();
        Self {
            app_id,
            frontend_root: config.frontend_root(&backend_root),
            backend_root,
            config_subdir: config.paths.config_subdir.clone(),
            generated_file: config.paths.generated_file.clone(),
            production_file: config.paths.production_file.clone(),
            branch: config.generator.branch.clone(),
            format: config.generator.format.clone(),
            dry_run: false,
        }
    }

    pub fn with_frontend_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.frontend_root = root.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn paths(&self) -> SyncPaths {
        SyncPaths::new(
            &self.frontend_root,
            &self.config_subdir,
            &self.generated_file,
            &self.production_file,
        )
    }
}

/// Filesystem locations touched by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    pub frontend_root: PathBuf,
    pub config_dir: PathBuf,
    pub generated_file: PathBuf,
    pub production_file: PathBuf,
    /// Production file relative to the frontend root, as git would name it
    pub production_relative: PathBuf,
}

impl SyncPaths {
    pub fn new(
        frontend_root: &Path,
        config_subdir: &Path,
        generated: &str,
        production: &str,
    ) -> Self {
        let config_dir = frontend_root.join(config_subdir);
        Self {
            frontend_root: frontend_root.to_path_buf(),
            generated_file: config_dir.join(generated),
            production_file: config_dir.join(production),
            production_relative: config_subdir.join(production),
            config_dir,
        }
    }

    pub fn has_git(&self) -> bool {
        self.frontend_root.join(".git").exists()
    }
}
