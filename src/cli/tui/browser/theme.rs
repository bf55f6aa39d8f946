use ratatui::style::{Color, Modifier, Style};

use super::state::StatusKind;
use crate::catalog::Category;

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub focused: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub highlight: Style,
    pub title: Style,
    pub disabled: Style,
    pub modal_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            modal_border: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Get color for category badges
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Articles => Color::Cyan,
            Category::Textbooks => Color::Green,
            Category::Monographs => Color::Magenta,
            Category::Essays => Color::Yellow,
            Category::Literature => Color::LightBlue,
            Category::Interviews => Color::LightRed,
        }
    }

    /// Get style for the status line
    pub fn status_style(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => self.highlight,
            StatusKind::Success => self.success,
            StatusKind::Error => self.error,
        }
    }
}
