//! ampsync CLI
//!
//! Usage: ampsync [OPTIONS] [APP_ID]
//!
//! Regenerates `<frontend>/lib/config/amplify_outputs_prod.dart` from a
//! deployed Amplify backend.

mod cli;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ampsync::config::{self, Config};
use ampsync::{resolve_app_id, ProcessGenerator, SyncEventSink, SyncOptions, SyncUseCase};
use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use ui::context::UiContext;
use ui::output::{print_config_warnings, ConsoleEventSink, JsonEventSink};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err((err, ui)) => {
            let ui = ui.unwrap_or_else(|| UiContext::fallback(&cli));
            ui::error::print_error(&err, &ui);
            ExitCode::from(1)
        }
    }
}

/// Errors carry the UI context when it was built, so rendering respects flags
fn run(cli: &Cli) -> Result<(), (anyhow::Error, Option<UiContext>)> {
    let backend_root = backend_root(cli).map_err(|e| (e, None))?;
    let (config, warnings) = load_config(cli, &backend_root).map_err(|e| (e, None))?;

    let ui = UiContext::new(cli.json, cli.verbose, cli.quiet, cli.color, &config);
    print_config_warnings(&warnings, &ui);

    sync(cli, &config, backend_root, &ui).map_err(|e| (e, Some(ui)))
}

fn backend_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.backend_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("reading current directory"),
    }
}

/// Defaults, then config file, then AMPSYNC_* env, then CLI flags
fn load_config(cli: &Cli, backend_root: &Path) -> Result<(Config, Vec<config::ConfigWarning>)> {
    let (mut config, warnings) =
        match config::resolve_config_path(backend_root, cli.config.as_deref()) {
            Some(path) => config::load_with_warnings(&path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => (Config::default(), Vec::new()),
        };

    config = config.with_env_overrides();

    if let Some(dir) = &cli.frontend_dir {
        config.paths.frontend_dir = dir.clone();
    }

    Ok((config, warnings))
}

fn sync(cli: &Cli, config: &Config, backend_root: PathBuf, ui: &UiContext) -> Result<()> {
    let env_app_id = std::env::var(ampsync::APP_ID_ENV).ok();
    let app_id = resolve_app_id(env_app_id.as_deref(), cli.app_id.as_deref());

    let options = SyncOptions::from_config(config, backend_root, app_id).with_dry_run(cli.dry_run);
    let generator = ProcessGenerator::from_config(&config.generator).with_stdout_to_stderr(ui.json);
    let use_case = SyncUseCase::new(generator);

    let sink: Box<dyn SyncEventSink> = if ui.json {
        Box::new(JsonEventSink)
    } else {
        Box::new(ConsoleEventSink::stdout(*ui))
    };

    use_case
        .execute_with_events(&options, sink.as_ref())
        .context("updating frontend config failed")?;
    Ok(())
}
