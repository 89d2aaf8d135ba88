//! Sync Use Case Tests

use super::*;
use crate::config::Config;
use crate::error::{SyncError, SyncResult};
use crate::generator::{Generator, GeneratorRequest};
use proptest::prelude::*;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

// Mock implementations for testing

#[derive(Clone, Copy)]
enum Behavior {
    WritesFile,
    WritesNothing,
    Fails,
}

struct FakeGenerator {
    behavior: Behavior,
    calls: RefCell<Vec<GeneratorRequest>>,
}

impl FakeGenerator {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Generator for FakeGenerator {
    fn describe(&self, request: &GeneratorRequest) -> String {
        format!("fake --app-id {}", request.app_id)
    }

    fn generate(&self, request: &GeneratorRequest) -> SyncResult<()> {
        self.calls.borrow_mut().push(request.clone());
        match self.behavior {
            Behavior::WritesFile => {
                fs::create_dir_all(&request.out_dir)?;
                fs::write(
                    request.out_dir.join("amplify_outputs.dart"),
                    format!("const amplifyConfig = '{}';", request.app_id),
                )?;
                Ok(())
            }
            Behavior::WritesNothing => Ok(()),
            Behavior::Fails => Err(SyncError::Io(std::io::Error::other("generator exploded"))),
        }
    }
}

#[derive(Default)]
struct RecordingEventSink {
    events: RefCell<Vec<SyncEvent>>,
}

impl SyncEventSink for RecordingEventSink {
    fn on_event(&self, event: SyncEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// backend/ and newtodo/ side by side, as the default config expects
struct Workspace {
    _dir: TempDir,
    backend: PathBuf,
    frontend: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let backend = dir.path().join("backend");
        let frontend = dir.path().join("newtodo");
        fs::create_dir_all(&backend).unwrap();
        fs::create_dir_all(&frontend).unwrap();
        Self {
            _dir: dir,
            backend,
            frontend,
        }
    }

    fn options(&self, app_id: Option<&str>) -> SyncOptions {
        SyncOptions::from_config(
            &Config::default(),
            &self.backend,
            app_id.map(String::from),
        )
    }

    fn config_file(&self, name: &str) -> PathBuf {
        self.frontend.join("lib/config").join(name)
    }
}

fn names(events: &[SyncEvent]) -> Vec<&'static str> {
    events
        .iter()
        .map(|e| match e {
            SyncEvent::Started { .. } => "started",
            SyncEvent::PathsResolved { .. } => "paths",
            SyncEvent::Generating { .. } => "generating",
            SyncEvent::Generated { .. } => "generated",
            SyncEvent::Renamed { .. } => "renamed",
            SyncEvent::CommitReminder { .. } => "commit_reminder",
            SyncEvent::Completed { .. } => "completed",
        })
        .collect()
}

#[test]
fn missing_app_id_fails_before_anything_else() {
    let ws = Workspace::new();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));
    let sink = RecordingEventSink::default();

    let err = use_case
        .execute_with_events(&ws.options(None), &sink)
        .unwrap_err();

    assert!(matches!(err, SyncError::MissingIdentifier));
    assert!(sink.events.borrow().is_empty());
    assert_eq!(use_case.generator().call_count(), 0);
}

#[test]
fn blank_app_id_counts_as_missing() {
    let ws = Workspace::new();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));

    let err = use_case.execute(&ws.options(Some("   "))).unwrap_err();
    assert!(matches!(err, SyncError::MissingIdentifier));
}

#[test]
fn missing_frontend_never_invokes_generator() {
    let ws = Workspace::new();
    let options = ws.options(Some("d1abc")).with_frontend_root(ws.backend.join("nope"));
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));

    let err = use_case.execute(&options).unwrap_err();

    match err {
        SyncError::MissingTarget { path } => assert!(path.ends_with("nope")),
        other => panic!("expected MissingTarget, got {:?}", other),
    }
    assert_eq!(use_case.generator().call_count(), 0);
}

#[test]
fn successful_run_renames_generated_file() {
    let ws = Workspace::new();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));
    let sink = RecordingEventSink::default();

    let outcome = use_case
        .execute_with_events(&ws.options(Some("d1abc")), &sink)
        .unwrap();

    assert!(!ws.config_file("amplify_outputs.dart").exists());
    let prod = ws.config_file("amplify_outputs_prod.dart");
    assert_eq!(
        fs::read_to_string(&prod).unwrap(),
        "const amplifyConfig = 'd1abc';"
    );
    assert_eq!(outcome.production_file, prod);
    assert!(!outcome.replaced_existing);
    assert!(!outcome.commit_reminder);
    assert!(outcome.has_changes());
    assert_eq!(
        names(&sink.events.borrow()),
        vec!["started", "paths", "generating", "generated", "renamed", "completed"]
    );
}

#[test]
fn generator_receives_fixed_parameters() {
    let ws = Workspace::new();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));

    use_case.execute(&ws.options(Some("d1abc"))).unwrap();

    let calls = use_case.generator().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].app_id, "d1abc");
    assert_eq!(calls[0].branch, "main");
    assert_eq!(calls[0].format, "dart");
    assert_eq!(calls[0].out_dir, ws.backend.join("../newtodo/lib/config"));
    assert_eq!(calls[0].working_dir, ws.backend);
}

#[test]
fn no_generated_file_is_generation_incomplete() {
    let ws = Workspace::new();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesNothing));

    let err = use_case.execute(&ws.options(Some("d1abc"))).unwrap_err();

    assert!(matches!(err, SyncError::GenerationIncomplete { .. }), "{:?}", err);
    assert!(!ws.config_file("amplify_outputs_prod.dart").exists());
}

#[test]
fn generator_failure_propagates_without_rename() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.frontend.join("lib/config")).unwrap();
    fs::write(ws.config_file("amplify_outputs.dart"), "partial").unwrap();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::Fails));

    let err = use_case.execute(&ws.options(Some("d1abc"))).unwrap_err();

    assert!(err.to_string().contains("generator exploded"));
    assert!(ws.config_file("amplify_outputs.dart").exists());
    assert!(!ws.config_file("amplify_outputs_prod.dart").exists());
}

#[test]
fn blocked_production_path_is_rename_error_with_both_paths() {
    let ws = Workspace::new();
    let blocker = ws.config_file("amplify_outputs_prod.dart");
    fs::create_dir_all(blocker.join("keep")).unwrap();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));
    let sink = RecordingEventSink::default();

    let err = use_case
        .execute_with_events(&ws.options(Some("d1abc")), &sink)
        .unwrap_err();

    match &err {
        SyncError::Rename { from, to, .. } => {
            assert_eq!(from, &ws.config_file("amplify_outputs.dart"));
            assert_eq!(to, &blocker);
        }
        other => panic!("expected rename error, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("amplify_outputs.dart"), "{}", message);
    assert!(message.contains("amplify_outputs_prod.dart"), "{}", message);
    assert!(!names(&sink.events.borrow()).contains(&"renamed"));
}

#[test]
fn rerun_overwrites_stale_production_file() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.frontend.join("lib/config")).unwrap();
    fs::write(ws.config_file("amplify_outputs_prod.dart"), "stale").unwrap();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));

    let first = use_case.execute(&ws.options(Some("first"))).unwrap();
    let second = use_case.execute(&ws.options(Some("second"))).unwrap();

    assert!(first.replaced_existing);
    assert!(second.replaced_existing);
    assert_eq!(
        fs::read_to_string(ws.config_file("amplify_outputs_prod.dart")).unwrap(),
        "const amplifyConfig = 'second';"
    );
    assert_eq!(use_case.generator().call_count(), 2);
}

#[test]
fn git_checkout_gets_commit_reminder() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.frontend.join(".git")).unwrap();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));
    let sink = RecordingEventSink::default();

    let outcome = use_case
        .execute_with_events(&ws.options(Some("d1abc")), &sink)
        .unwrap();

    assert!(outcome.commit_reminder);
    let events = sink.events.borrow();
    let reminder = events
        .iter()
        .find_map(|e| match e {
            SyncEvent::CommitReminder { relative_file, .. } => Some(relative_file.clone()),
            _ => None,
        })
        .expect("commit reminder event");
    assert_eq!(reminder, Path::new("lib/config/amplify_outputs_prod.dart"));
}

#[test]
fn dry_run_plans_without_generating() {
    let ws = Workspace::new();
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));
    let sink = RecordingEventSink::default();

    let outcome = use_case
        .execute_with_events(&ws.options(Some("d1abc")).with_dry_run(true), &sink)
        .unwrap();

    assert!(outcome.dry_run);
    assert!(!outcome.has_changes());
    assert_eq!(outcome.command, "fake --app-id d1abc");
    assert_eq!(use_case.generator().call_count(), 0);
    assert!(!ws.frontend.join("lib").exists());
    assert_eq!(
        names(&sink.events.borrow()),
        vec!["started", "paths", "generating", "completed"]
    );
}

#[test]
fn dry_run_still_checks_frontend() {
    let ws = Workspace::new();
    let options = ws
        .options(Some("d1abc"))
        .with_frontend_root(ws.backend.join("missing"))
        .with_dry_run(true);
    let use_case = SyncUseCase::new(FakeGenerator::new(Behavior::WritesFile));

    assert!(matches!(
        use_case.execute(&options),
        Err(SyncError::MissingTarget { .. })
    ));
}

#[test]
fn resolve_app_id_prefers_environment() {
    assert_eq!(resolve_app_id(Some("env"), Some("arg")), Some("env".into()));
    assert_eq!(resolve_app_id(Some(""), Some("arg")), Some("arg".into()));
    assert_eq!(resolve_app_id(None, Some(" arg ")), Some("arg".into()));
    assert_eq!(resolve_app_id(Some(" "), None), None);
    assert_eq!(resolve_app_id(None, None), None);
}

#[test]
fn sync_paths_layout() {
    let paths = SyncPaths::new(
        Path::new("/f"),
        Path::new("lib/config"),
        "amplify_outputs.dart",
        "amplify_outputs_prod.dart",
    );
    assert_eq!(paths.config_dir, PathBuf::from("/f/lib/config"));
    assert_eq!(
        paths.generated_file,
        PathBuf::from("/f/lib/config/amplify_outputs.dart")
    );
    assert_eq!(
        paths.production_file,
        PathBuf::from("/f/lib/config/amplify_outputs_prod.dart")
    );
}

proptest! {
    #[test]
    fn non_blank_env_always_wins(env in "[a-z0-9]{1,12}", arg in proptest::option::of("[a-z0-9]{0,12}")) {
        prop_assert_eq!(resolve_app_id(Some(env.as_str()), arg.as_deref()), Some(env.clone()));
    }

    #[test]
    fn blank_env_defers_to_arg(pad in " {0,4}", arg in "[a-z0-9]{1,12}") {
        prop_assert_eq!(resolve_app_id(Some(pad.as_str()), Some(arg.as_str())), Some(arg.clone()));
    }
}
