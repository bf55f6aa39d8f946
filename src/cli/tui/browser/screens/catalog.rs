//! Catalog tab: search bar, category chips, sort selector and the card list

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::cli::tui::browser::state::{BrowserState, CatalogFocus};
use crate::cli::tui::browser::theme::Theme;
use crate::query::CategoryFilter;
use crate::view::{CatalogViewModel, PublicationCard, EMPTY_MESSAGE};

const SEARCH_PLACEHOLDER: &str = "Поиск по названию или описанию...";

pub fn render(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Categories
            Constraint::Length(1), // Sort
            Constraint::Min(3),    // Cards
            Constraint::Length(1), // Count
        ])
        .split(area);

    // Recomputed on every frame
    let view = state.view.view_model();

    render_search_bar(frame, chunks[0], state, theme);
    render_categories(frame, chunks[1], state, theme);
    render_sort(frame, chunks[2], state, theme);
    render_cards(frame, chunks[3], &view, state.catalog.scroll, theme);
    render_count(frame, chunks[4], &view, theme);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let focused = state.catalog.focus == CatalogFocus::Search;
    let value = state.catalog.search_input.value();

    let mut spans = vec![Span::styled(" ⌕ ", theme.muted)];
    if value.is_empty() && !focused {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, theme.muted));
    } else {
        spans.push(Span::raw(value));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { theme.focused } else { theme.muted }),
    );

    frame.render_widget(input, area);
}

fn render_categories(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let selected = state.view.state().selected_type;

    let mut spans = vec![Span::raw(" ")];
    for option in CategoryFilter::options() {
        let style = if option == selected {
            theme.selected
        } else {
            theme.muted
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_sort(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let order = state.view.state().sort_order;
    let line = Line::from(vec![
        Span::raw(" Сортировка: "),
        Span::styled(order.label(), theme.highlight),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn card_lines<'a>(card: &'a PublicationCard, theme: &Theme) -> Vec<Line<'a>> {
    let mut meta = vec![
        Span::raw("  "),
        Span::styled(
            format!(" {} ", card.category.label()),
            Style::default()
                .fg(Color::Black)
                .bg(theme.category_color(card.category)),
        ),
        Span::styled(format!("  {}", card.year), theme.muted),
    ];
    if let Some(journal) = &card.journal {
        meta.push(Span::styled(format!("  · {}", journal), theme.muted));
    }
    if let Some(pages) = &card.pages {
        meta.push(Span::styled(format!("  · {}", pages), theme.muted));
    }

    vec![
        Line::from(Span::styled(format!(" {}", card.title), theme.title)),
        Line::from(meta),
        Line::from(format!("  {}", card.description)),
        Line::from(""),
    ]
}

fn render_cards(frame: &mut Frame, area: Rect, view: &CatalogViewModel, scroll: u16, theme: &Theme) {
    let block = Block::default().borders(Borders::TOP).border_style(theme.muted);

    if view.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_MESSAGE,
                theme.muted.add_modifier(Modifier::ITALIC),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = view
        .cards
        .iter()
        .flat_map(|card| card_lines(card, theme))
        .collect();

    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);

    frame.render_widget(list, area);
}

fn render_count(frame: &mut Frame, area: Rect, view: &CatalogViewModel, theme: &Theme) {
    if let Some(footer) = view.footer() {
        let count = Paragraph::new(Span::styled(footer, theme.muted)).alignment(Alignment::Center);
        frame.render_widget(count, area);
    }
}
