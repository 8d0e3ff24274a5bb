//! Confirmation dialog
//!
//! Renders the confirmation workflow slot: a kind icon, title, description,
//! and the confirm/cancel controls. While the deferred action is running the
//! confirm control reads "Processing..." and both controls are disabled.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::confirm::{ConfirmEmphasis, ConfirmFlow, ConfirmKind};
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation dialog from the workflow slot
pub fn render(frame: &mut Frame, flow: &ConfirmFlow) {
    let Some(options) = flow.options() else {
        return;
    };
    let pending = flow.is_pending();

    let area = centered_rect_fixed(56, 11, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let accent = kind_color(options.kind);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", kind_icon(options.kind)),
                Style::default().fg(accent),
            ),
            Span::styled(
                options.title.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            options.description.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    if pending {
        lines.push(Line::from(vec![
            Span::styled(
                options.cancel_label.clone(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
            Span::raw("  "),
            Span::styled(
                "Processing...",
                Style::default().fg(accent).add_modifier(Modifier::DIM),
            ),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(
                options.cancel_label.clone(),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled(
                options.confirm_label.clone(),
                emphasis_style(options.emphasis),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Accent color for a confirmation kind
fn kind_color(kind: ConfirmKind) -> Color {
    match kind {
        ConfirmKind::Delete => Color::Red,
        ConfirmKind::Warning => Color::Yellow,
        ConfirmKind::Info => Color::Blue,
    }
}

/// Icon glyph for a confirmation kind
fn kind_icon(kind: ConfirmKind) -> &'static str {
    match kind {
        ConfirmKind::Delete => "✖",
        ConfirmKind::Warning => "⚠",
        ConfirmKind::Info => "ℹ",
    }
}

/// Style for the confirm control per its emphasis
fn emphasis_style(emphasis: ConfirmEmphasis) -> Style {
    match emphasis {
        ConfirmEmphasis::Plain => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        ConfirmEmphasis::Destructive => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        ConfirmEmphasis::Outline => Style::default().fg(Color::White),
        ConfirmEmphasis::Secondary => Style::default().fg(Color::Gray),
        ConfirmEmphasis::Ghost => Style::default().fg(Color::DarkGray),
        ConfirmEmphasis::Link => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    }
}
