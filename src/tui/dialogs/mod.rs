//! Dialog modules for the TUI
//!
//! Contains modal dialogs for various operations

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub mod asset;
pub mod confirm;
pub mod department;
pub mod help;
pub mod maintenance;

/// Render a labeled text field with a cursor when focused
pub(crate) fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    cursor: usize,
    placeholder: &str,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let label_span = Span::styled(format!("{}: ", label), label_style);

    let value_style = Style::default().fg(Color::White);

    let mut spans = vec![label_span];

    if value.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        return;
    }

    if focused {
        // The cursor is a character index; convert before splitting
        let cursor_pos = value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(value.len());
        let (before, after) = value.split_at(cursor_pos);

        spans.push(Span::styled(before.to_string(), value_style));

        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let rest: String = rest.collect();
        if !rest.is_empty() {
            spans.push(Span::styled(rest, value_style));
        }
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
