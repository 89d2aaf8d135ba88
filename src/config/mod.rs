//! Configuration module for ampsync
//!
//! Layered, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (AMPSYNC_*)
//! 3. One config file, the first that applies of: `--config`,
//!    `<backend>/ampsync.toml`, `<config dir>/ampsync/config.toml`.
//!    Files are not merged with each other.
//! 4. Built-in defaults

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    apply_env_overrides, load_with_warnings, resolve_config_path, with_env_overrides,
    ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, GeneratorConfig, OutputConfig, PathsConfig, Verbosity};
