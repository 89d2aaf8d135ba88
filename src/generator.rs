//! Generator Port
//!
//! The external CLI that writes the client configuration file. The use case
//! only talks to the `Generator` trait; `ProcessGenerator` is the real thing.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::GeneratorConfig;
use crate::error::{SyncError, SyncResult};

/// One generator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorRequest {
    pub app_id: String,
    pub branch: String,
    pub format: String,
    pub out_dir: PathBuf,
    /// Working directory for the child process (the backend root)
    pub working_dir: PathBuf,
}

/// Produces the client configuration file for a deployed backend
pub trait Generator {
    /// Human-readable command line, used for progress output and dry runs
    fn describe(&self, request: &GeneratorRequest) -> String;

    /// Run to completion. Must not return before the output file is written.
    fn generate(&self, request: &GeneratorRequest) -> SyncResult<()>;
}

/// Spawns the generator as a child process with inherited stdio
#[derive(Debug, Clone)]
pub struct ProcessGenerator {
    program: String,
    base_args: Vec<String>,
    stdout_to_stderr: bool,
}

impl ProcessGenerator {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
            stdout_to_stderr: false,
        }
    }

    /// Send the child's stdout to our stderr so an NDJSON stream stays clean
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    /// Build from `generator.command`; an empty command falls back to the default
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut parts = config.command.iter().cloned();
        match parts.next() {
            Some(program) => Self::new(program, parts.collect()),
            None => Self::from_config(&GeneratorConfig::default()),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument vector passed to the program
    pub fn args(&self, request: &GeneratorRequest) -> Vec<String> {
        let mut args = self.base_args.clone();
        args.extend([
            "--app-id".to_string(),
            request.app_id.clone(),
            "--branch".to_string(),
            request.branch.clone(),
            "--format".to_string(),
            request.format.clone(),
            "--out-dir".to_string(),
            request.out_dir.display().to_string(),
        ]);
        args
    }
}

impl Generator for ProcessGenerator {
    fn describe(&self, request: &GeneratorRequest) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args(request))
            .map(|part| shell_quote(&part))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn generate(&self, request: &GeneratorRequest) -> SyncResult<()> {
        let stdout = if self.stdout_to_stderr {
            Stdio::from(std::io::stderr())
        } else {
            Stdio::inherit()
        };

        let status = Command::new(&self.program)
            .args(self.args(request))
            .current_dir(&request.working_dir)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| SyncError::GeneratorSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SyncError::GeneratorFailed { status });
        }

        Ok(())
    }
}

/// Quote for display only; the process is spawned with an argv, not a shell
fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@%+,".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}
