use crossterm::style::Color;

/// Design tokens for the ampsync console output.
///
/// All icons and colors used by `ui::output` and `ui::error` come from here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SYNC: &str = "🔄";
    pub const APP: &str = "📦";
    pub const GENERATE: &str = "📥";
    pub const SUCCESS: &str = "✅";
    pub const FILE: &str = "📄";
    pub const TIP: &str = "💡";
    pub const DONE: &str = "🎉";
    pub const DRY_RUN: &str = "🔍";
    pub const WARNING: &str = "⚠";
    pub const ERROR: &str = "❌";
}

pub mod icons_ascii {
    pub const SYNC: &str = "[SYNC]";
    pub const APP: &str = "[APP]";
    pub const GENERATE: &str = "[GEN]";
    pub const SUCCESS: &str = "[OK]";
    pub const FILE: &str = "[FILE]";
    pub const TIP: &str = "[TIP]";
    pub const DONE: &str = "[DONE]";
    pub const DRY_RUN: &str = "[DRY RUN]";
    pub const WARNING: &str = "[WARN]";
    pub const ERROR: &str = "[ERROR]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sync,
    App,
    Generate,
    Success,
    File,
    Tip,
    Done,
    DryRun,
    Warning,
    Error,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Sync => icons::SYNC,
                Icon::App => icons::APP,
                Icon::Generate => icons::GENERATE,
                Icon::Success => icons::SUCCESS,
                Icon::File => icons::FILE,
                Icon::Tip => icons::TIP,
                Icon::Done => icons::DONE,
                Icon::DryRun => icons::DRY_RUN,
                Icon::Warning => icons::WARNING,
                Icon::Error => icons::ERROR,
            }
        } else {
            match self {
                Icon::Sync => icons_ascii::SYNC,
                Icon::App => icons_ascii::APP,
                Icon::Generate => icons_ascii::GENERATE,
                Icon::Success => icons_ascii::SUCCESS,
                Icon::File => icons_ascii::FILE,
                Icon::Tip => icons_ascii::TIP,
                Icon::Done => icons_ascii::DONE,
                Icon::DryRun => icons_ascii::DRY_RUN,
                Icon::Warning => icons_ascii::WARNING,
                Icon::Error => icons_ascii::ERROR,
            }
        }
    }
}
