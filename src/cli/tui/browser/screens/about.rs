//! About tab: author profile next to the contact form

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::catalog::AuthorProfile;
use crate::cli::tui::browser::state::{BrowserState, FormFocus};
use crate::cli::tui::browser::theme::Theme;
use crate::contact::ContactField;

pub fn render(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_profile(frame, columns[0], state.view.author(), theme);
    render_form(frame, columns[1], state, theme);
}

fn render_profile(frame: &mut Frame, area: Rect, author: Option<&AuthorProfile>, theme: &Theme) {
    let block = Block::default()
        .title(" Об авторе ")
        .borders(Borders::ALL)
        .border_style(theme.muted);

    let Some(author) = author else {
        let empty = Paragraph::new(Span::styled("Профиль автора не задан", theme.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(author.name.as_str(), theme.title))];
    if let Some(position) = &author.position {
        lines.push(Line::from(Span::styled(position.as_str(), theme.muted)));
    }
    lines.push(Line::from(""));
    for paragraph in &author.bio {
        lines.push(Line::from(paragraph.as_str()));
        lines.push(Line::from(""));
    }
    if !author.interests.is_empty() {
        lines.push(Line::from(Span::styled("Научные интересы", theme.highlight)));
        for interest in &author.interests {
            lines.push(Line::from(format!(" • {}", interest)));
        }
    }
    if let Some(email) = &author.email {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Email: ", theme.muted),
            Span::raw(email.as_str()),
        ]));
    }

    let profile = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(profile, area);
}

fn render_form(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let block = Block::default()
        .title(" Обратная связь ")
        .borders(Borders::ALL)
        .border_style(theme.muted);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Min(3),    // Message
            Constraint::Length(3), // Submit
        ])
        .split(inner);

    for (field, chunk) in ContactField::ALL.into_iter().zip(chunks.iter()) {
        render_field(frame, *chunk, state, field, theme);
    }
    render_submit(frame, chunks[3], state, theme);
}

fn render_field(frame: &mut Frame, area: Rect, state: &BrowserState, field: ContactField, theme: &Theme) {
    let focused = state.about.focus == FormFocus::Field(field);
    let locked = state.view.contact().is_submitting();

    let mut spans = vec![Span::raw(state.about.inputs.get(field).value())];
    if focused && !locked {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }

    let border_style = if locked {
        theme.disabled
    } else if focused {
        theme.focused
    } else {
        theme.muted
    };

    let input = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", field.label()))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(input, area);
}

fn render_submit(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let contact = state.view.contact();
    let focused = state.about.focus == FormFocus::Submit;

    let (label, style) = if contact.is_submitting() {
        ("Отправка...", theme.disabled)
    } else if !contact.can_submit() {
        ("Отправить", theme.disabled)
    } else if focused {
        ("Отправить", theme.selected)
    } else {
        ("Отправить", theme.highlight)
    };

    let button = Paragraph::new(Span::styled(format!(" {} ", label), style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if focused { theme.focused } else { theme.muted }),
        );
    frame.render_widget(button, area);
}
