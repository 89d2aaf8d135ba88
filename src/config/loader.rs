//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{SyncError, SyncResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// File name looked up in the backend root
pub const PROJECT_CONFIG_FILE: &str = "ampsync.toml";

const KNOWN_KEYS: &[&str] = &[
    "paths",
    "frontend_dir",
    "config_subdir",
    "generated_file",
    "production_file",
    "generator",
    "command",
    "branch",
    "format",
    "output",
    "verbosity",
    "color",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SyncError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file to load, if any.
///
/// An explicit path is returned as-is so a missing file surfaces as an error.
/// Otherwise the backend config wins over the user config.
pub fn resolve_config_path(backend_root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project_config = backend_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }

    dirs::config_dir()
        .map(|dir| dir.join("ampsync").join("config.toml"))
        .filter(|p| p.is_file())
}

/// Apply environment variable overrides from the process environment
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(
        config,
        |key| std::env::var(key).ok(),
        &mut std::io::stderr(),
    )
}

/// Apply AMPSYNC_* overrides read through `get_env`; warnings go to `writer`
pub fn apply_env_overrides<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> Config {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(dir) = non_empty("AMPSYNC_FRONTEND_DIR") {
        config.paths.frontend_dir = PathBuf::from(dir);
    }

    if let Some(branch) = non_empty("AMPSYNC_BRANCH") {
        config.generator.branch = branch.trim().to_string();
    }

    if let Some(format) = non_empty("AMPSYNC_FORMAT") {
        config.generator.format = format.trim().to_string();
    }

    // Whitespace-split; paths with spaces belong in the config file instead
    if let Some(command) = non_empty("AMPSYNC_GENERATOR") {
        config.generator.command = command.split_whitespace().map(String::from).collect();
    }

    if let Some(verbosity) = non_empty("AMPSYNC_VERBOSITY") {
        let validator = EnvVarValidator::new("AMPSYNC_VERBOSITY", Verbosity::NAMES);
        config.output.verbosity = validator.parse_with_writer(
            &verbosity,
            Verbosity::parse,
            config.output.verbosity,
            writer,
        );
    }

    config
}

/// Line of `key = ...` or of a `[table]` header whose last segment is `key`
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            let assigns = line
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            let opens_table = line
                .strip_prefix('[')
                .and_then(|rest| rest.trim_start_matches('[').split(']').next())
                .and_then(|name| name.rsplit('.').next())
                .is_some_and(|last| last.trim() == key);
            assigns || opens_table
        })
        .map(|i| i + 1)
}

fn suggest_key(key: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, levenshtein(key, known)))
        .filter(|(_, dist)| *dist > 0 && *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(known, _)| known.to_string())
}
