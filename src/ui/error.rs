use ampsync::SyncError;

use crate::ui::context::UiContext;
use crate::ui::json::{self, JsonEvent};
use crate::ui::text::{paint_bold, SemanticColor};
use crate::ui::theme::Icon;

/// Known sync failures get a usage block or a hint; everything else prints
/// the full context chain.
pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let icon = Icon::Error.render(ui.unicode);
    let headline = |text: String| {
        paint_bold(&format!("{} Error: {}", icon, text), SemanticColor::Error, ui.color)
    };

    match err.downcast_ref::<SyncError>() {
        Some(sync @ SyncError::MissingIdentifier) => format!(
            "{}\nUsage: {}=xxx ampsync\n   or: ampsync YOUR_APP_ID\n",
            headline(sync.to_string()),
            ampsync::APP_ID_ENV
        ),
        Some(SyncError::MissingTarget { path }) => format!(
            "{}\n   Pass --frontend-dir or set AMPSYNC_FRONTEND_DIR.\n",
            headline(format!("Frontend directory not found at {}", path.display()))
        ),
        Some(SyncError::GenerationIncomplete { path }) => format!(
            "{}\n   Expected: {}\n",
            headline("Config file was not generated".to_string()),
            path.display()
        ),
        _ => format!("{}\n", headline(format!("{:#}", err))),
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let code = err
            .downcast_ref::<SyncError>()
            .map(SyncError::code)
            .unwrap_or("error");
        let _ = json::emit(&JsonEvent::Error {
            code,
            message: format!("{:#}", err),
        });
    }

    eprint!("{}", format_error(err, ui));
}
