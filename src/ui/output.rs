use std::cell::RefCell;
use std::io::{self, Write};

use ampsync::config::ConfigWarning;
use ampsync::{SyncEvent, SyncEventSink};

use crate::ui::context::UiContext;
use crate::ui::json::{self, JsonEvent};
use crate::ui::text::{paint, paint_bold, SemanticColor};
use crate::ui::theme::Icon;

const COMMIT_MESSAGE: &str = "chore: update production Amplify config";

/// Human-readable progress on stdout
pub struct ConsoleEventSink<W: Write> {
    ui: UiContext,
    out: RefCell<W>,
}

impl ConsoleEventSink<io::Stdout> {
    pub fn stdout(ui: UiContext) -> Self {
        Self::new(ui, io::stdout())
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(ui: UiContext, out: W) -> Self {
        Self {
            ui,
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn icon(&self, icon: Icon) -> &'static str {
        icon.render(self.ui.unicode)
    }

    fn lines(&self, event: &SyncEvent) -> Vec<String> {
        let color = self.ui.color;
        let verbose = self.ui.is_verbose();
        let dim = |text: String| paint(&text, SemanticColor::Dim, color);

        match event {
            SyncEvent::Started { app_id } => vec![
                format!("{} Updating frontend production config...", self.icon(Icon::Sync)),
                format!("{} App ID: {}", self.icon(Icon::App), app_id),
            ],
            SyncEvent::PathsResolved {
                backend_root,
                frontend_root,
                config_dir,
            } if verbose => vec![
                dim(format!("   Backend:  {}", backend_root.display())),
                dim(format!("   Frontend: {}", frontend_root.display())),
                dim(format!("   Output:   {}", config_dir.display())),
            ],
            SyncEvent::PathsResolved { .. } => Vec::new(),
            SyncEvent::Generating {
                command,
                dry_run: true,
                ..
            } => vec![format!(
                "{} Would run: {}",
                self.icon(Icon::DryRun),
                paint(command, SemanticColor::Info, color)
            )],
            SyncEvent::Generating {
                command,
                working_dir,
                ..
            } => {
                let mut lines = vec![format!(
                    "{} Generating Amplify outputs...",
                    self.icon(Icon::Generate)
                )];
                if verbose {
                    lines.push(dim(format!("   $ {}", command)));
                }
                if self.ui.is_debug() {
                    lines.push(dim(format!("   in {}", working_dir.display())));
                }
                lines
            }
            SyncEvent::Generated { path } if verbose => {
                vec![dim(format!("   Generated {}", path.display()))]
            }
            SyncEvent::Generated { .. } => Vec::new(),
            SyncEvent::Renamed { to, replaced, .. } => {
                let mut lines = vec![
                    paint(
                        &format!(
                            "{} Production config updated successfully!",
                            self.icon(Icon::Success)
                        ),
                        SemanticColor::Success,
                        color,
                    ),
                    format!("{} File: {}", self.icon(Icon::File), to.display()),
                ];
                if *replaced && verbose {
                    lines.push(dim("   (replaced previous production config)".to_string()));
                }
                lines
            }
            SyncEvent::CommitReminder {
                frontend_root,
                relative_file,
            } => vec![
                String::new(),
                paint(
                    &format!("{} Tip: Commit and push the changes:", self.icon(Icon::Tip)),
                    SemanticColor::Info,
                    color,
                ),
                format!("   cd {}", frontend_root.display()),
                format!("   git add {}", relative_file.display()),
                format!("   git commit -m \"{}\"", COMMIT_MESSAGE),
                "   git push".to_string(),
            ],
            SyncEvent::Completed { dry_run: true, .. } => vec![
                String::new(),
                format!(
                    "{} Dry run: nothing was generated or renamed.",
                    self.icon(Icon::DryRun)
                ),
            ],
            SyncEvent::Completed { frontend_root, .. } => vec![
                String::new(),
                paint_bold(
                    &format!(
                        "{} Done! Frontend is ready to use production config.",
                        self.icon(Icon::Done)
                    ),
                    SemanticColor::Success,
                    color,
                ),
                format!(
                    "Run: cd {} && flutter run --dart-define=ENVIRONMENT=prod",
                    frontend_root.display()
                ),
            ],
        }
    }
}

impl<W: Write> SyncEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: SyncEvent) {
        if self.ui.is_quiet() {
            return;
        }
        let mut out = self.out.borrow_mut();
        for line in self.lines(&event) {
            let _ = writeln!(out, "{}", line);
        }
        // Flush before the generator takes over the inherited stdout
        let _ = out.flush();
    }
}

/// NDJSON progress on stdout
pub struct JsonEventSink;

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let _ = json::emit(&JsonEvent::from(&event));
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let message = format!("Unknown config key '{}' in {}", w.key, location);

        if ui.json {
            let _ = json::emit(&JsonEvent::Warning { message: &message });
            continue;
        }

        eprintln!(
            "{} {}",
            Icon::Warning.render(ui.unicode),
            paint(&message, SemanticColor::Warning, ui.color)
        );
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
