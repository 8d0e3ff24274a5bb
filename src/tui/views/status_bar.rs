//! Status bar view
//!
//! Shows inventory totals, the active status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let assets = app.storage.assets.get_all().unwrap_or_default();
    let total = assets.len();
    let flagged = assets.iter().filter(|a| a.status.is_flagged()).count();

    // Build status line
    let mut spans = vec![];

    spans.push(Span::styled(" Assets: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format!("{}", total),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));

    // Separator
    spans.push(Span::raw(" │ "));

    let flagged_color = if flagged > 0 { Color::Red } else { Color::Green };
    spans.push(Span::styled("Flagged: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format!("{}", flagged),
        Style::default().fg(flagged_color),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help ";

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
