//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader;

/// Where the frontend lives and what the generated files are called
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Frontend project root; relative paths resolve against the backend root
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,

    /// Directory inside the frontend that receives the generated file
    #[serde(default = "default_config_subdir")]
    pub config_subdir: PathBuf,

    #[serde(default = "default_generated_file")]
    pub generated_file: String,

    #[serde(default = "default_production_file")]
    pub production_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            frontend_dir: default_frontend_dir(),
            config_subdir: default_config_subdir(),
            generated_file: default_generated_file(),
            production_file: default_production_file(),
        }
    }
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("../newtodo")
}

fn default_config_subdir() -> PathBuf {
    PathBuf::from("lib/config")
}

fn default_generated_file() -> String {
    "amplify_outputs.dart".to_string()
}

fn default_production_file() -> String {
    "amplify_outputs_prod.dart".to_string()
}

/// External generator invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Program followed by its fixed leading arguments
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            branch: default_branch(),
            format: default_format(),
        }
    }
}

fn default_command() -> Vec<String> {
    ["npx", "ampx", "generate", "outputs"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_format() -> String {
    "dart".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const NAMES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Map `-v` count and `-q` onto a level, starting from `base`
    pub fn from_flags(base: Verbosity, verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => base,
            1 => base.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Apply environment variable overrides (AMPSYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Frontend root resolved against the backend root
    pub fn frontend_root(&self, backend_root: &Path) -> PathBuf {
        backend_root.join(&self.paths.frontend_dir)
    }
}
