//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Build help text based on current view
    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch panel focus"),
        key_line("j/k", "Move selection up/down"),
        key_line("1-5", "Switch view"),
        Line::from(""),
    ];

    // View-specific help
    match app.active_view {
        ActiveView::Dashboard => {
            lines.push(Line::from(vec![Span::styled(
                "Dashboard",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("2", "Manage departments"));
            lines.push(key_line("3", "Manage assets"));
            lines.push(key_line("4", "Log maintenance"));
            lines.push(key_line("5", "View reports"));
        }
        ActiveView::Departments => {
            lines.push(Line::from(vec![Span::styled(
                "Departments View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add department"));
            lines.push(key_line("e/Enter", "Edit department"));
            lines.push(key_line("Ctrl+d", "Delete department"));
        }
        ActiveView::Assets => {
            lines.push(Line::from(vec![Span::styled(
                "Assets View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add asset"));
            lines.push(key_line("e/Enter", "Edit asset"));
            lines.push(key_line("Ctrl+d", "Delete asset"));
            lines.push(key_line("/", "Search by name or serial"));
            lines.push(key_line("f", "Cycle department filter"));
            lines.push(key_line("Esc", "Clear search and filter"));
        }
        ActiveView::Maintenance => {
            lines.push(Line::from(vec![Span::styled(
                "Maintenance View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Log maintenance"));
            lines.push(key_line("Ctrl+d", "Delete record"));
        }
        ActiveView::Reports => {
            lines.push(Line::from(vec![Span::styled(
                "Reports View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("x", "Export asset report to CSV"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
