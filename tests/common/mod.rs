//! Common test utilities for ampsync CLI tests.
//!
//! `TestEnv` lays out `backend/` and `newtodo/` side by side in a temp
//! directory (the default relative layout) and runs the binary against them
//! with a stub generator script standing in for the Amplify CLI.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub const GENERATED: &str = "amplify_outputs.dart";
pub const PRODUCTION: &str = "amplify_outputs_prod.dart";

/// What the stub generator does when invoked
#[derive(Debug, Clone, Copy)]
pub enum StubGenerator {
    /// Writes `amplify_outputs.dart` into `--out-dir`
    WritesFile,
    /// Exits 0 without writing anything
    WritesNothing,
    /// Exits with the given status without writing anything
    ExitsWith(i32),
}

impl StubGenerator {
    fn script(self) -> String {
        let action = match self {
            StubGenerator::WritesFile => format!(
                "mkdir -p \"$out\"\nprintf '%s' \"$app\" > \"$out/{}\"\n",
                GENERATED
            ),
            StubGenerator::WritesNothing => String::new(),
            StubGenerator::ExitsWith(code) => format!("exit {}\n", code),
        };

        format!(
            r#"#!/bin/sh
printf '%s\n' "$*" > "$PWD/generator-args.txt"
out=""
app=""
while [ $# -gt 0 ]; do
  case "$1" in
    --out-dir) out="$2"; shift 2 ;;
    --app-id) app="$2"; shift 2 ;;
    *) shift ;;
  esac
done
{action}"#
        )
    }
}

/// Result of running the ampsync binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Isolated backend + frontend pair
pub struct TestEnv {
    root: TempDir,
    pub backend: PathBuf,
    pub frontend: PathBuf,
    generator: PathBuf,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new(stub: StubGenerator) -> Self {
        let root = tempfile::tempdir().unwrap();
        let backend = root.path().join("backend");
        let frontend = root.path().join("newtodo");
        fs::create_dir_all(&backend).unwrap();
        fs::create_dir_all(&frontend).unwrap();

        let generator = root.path().join("fake-ampx.sh");
        fs::write(&generator, stub.script()).unwrap();
        make_executable(&generator);

        Self {
            root,
            backend,
            frontend,
            generator,
            env: Vec::new(),
        }
    }

    /// Frontend directory is not created
    pub fn without_frontend(stub: StubGenerator) -> Self {
        let env = Self::new(stub);
        fs::remove_dir_all(&env.frontend).unwrap();
        env
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn config_file(&self, name: &str) -> PathBuf {
        self.frontend.join("lib/config").join(name)
    }

    /// Arguments the stub generator saw, if it ran
    pub fn generator_args(&self) -> Option<String> {
        fs::read_to_string(self.backend.join("generator-args.txt")).ok()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ampsync"));
        cmd.current_dir(&self.backend)
            .env_remove("AMPLIFY_APP_ID")
            .env_remove("AMPSYNC_FRONTEND_DIR")
            .env_remove("AMPSYNC_BRANCH")
            .env_remove("AMPSYNC_FORMAT")
            .env_remove("AMPSYNC_VERBOSITY")
            .env("AMPSYNC_GENERATOR", &self.generator)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .args(args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }

        let output = cmd.output().unwrap();
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
