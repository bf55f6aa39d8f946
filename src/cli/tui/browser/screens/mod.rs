/// Screen modules for the browser tabs
pub mod about;
pub mod catalog;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::state::{BrowserState, CatalogFocus, FormFocus};
use super::theme::Theme;
use crate::view::Tab;

/// Tab bar at the top of every screen
pub fn render_tabs(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" F{} {} ", i + 1, tab.label())))
        .collect();

    let active = Tab::ALL
        .iter()
        .position(|tab| *tab == state.view.state().active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(active)
        .highlight_style(theme.selected)
        .divider(Span::styled("│", theme.muted))
        .block(Block::default().borders(Borders::ALL).title(" folio "));

    frame.render_widget(tabs, area);
}

/// Acknowledgments and validation messages
pub fn render_status(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    if let Some(status) = &state.status {
        let line = Line::from(Span::styled(
            format!(" {}", status.text),
            theme.status_style(status.kind),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn key_hint<'a>(key: &'a str, action: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::styled(key, Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {}  ", action)),
    ]
}

/// Key bindings for the focused control
pub fn render_help(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let hints: Vec<(&str, &str)> = match state.view.state().active_tab {
        Tab::Catalog if state.catalog.focus == CatalogFocus::Search => {
            vec![("Enter", "Done"), ("Esc", "Clear")]
        }
        Tab::Catalog => vec![
            ("/", "Search"),
            ("←→", "Category"),
            ("s", "Sort"),
            ("↑↓", "Scroll"),
            ("r", "Reset"),
            ("Tab", "About"),
            ("q", "Quit"),
        ],
        Tab::About if state.about.focus == FormFocus::Submit => {
            vec![("Enter", "Send"), ("Tab", "Next field"), ("Esc", "Catalog")]
        }
        Tab::About => vec![
            ("Tab", "Next field"),
            ("Ctrl+S", "Send"),
            ("Esc", "Catalog"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.extend(key_hint(key, action));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(help, area);
}
