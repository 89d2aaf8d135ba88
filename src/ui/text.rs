use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn color(self) -> crossterm::style::Color {
        match self {
            SemanticColor::Success => theme::colors::SUCCESS,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Warning => theme::colors::WARNING,
            SemanticColor::Info => theme::colors::INFO,
            SemanticColor::Dim => theme::colors::DIM,
        }
    }
}

/// Style `text`, or return it untouched when color is off
pub fn paint(text: &str, color: SemanticColor, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("{}", text.with(color.color()))
}

pub fn paint_bold(text: &str, color: SemanticColor, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("{}", text.with(color.color()).bold())
}
