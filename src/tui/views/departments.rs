//! Departments view
//!
//! Table of departments with their asset counts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::services::DepartmentService;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the departments view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, layout.header);
    render_department_table(frame, app, layout.content);
}

/// Render departments header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Departments ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("Manage your university departments  (a:Add  e:Edit  Ctrl+d:Delete)")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render department table
fn render_department_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let department_service = DepartmentService::new(&app.storage);
    let summaries = department_service.list_with_counts().unwrap_or_default();

    if summaries.is_empty() {
        let text = Paragraph::new("No departments yet. Create your first department to get started.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Define column widths
    let widths = [
        ratatui::layout::Constraint::Length(24), // Name
        ratatui::layout::Constraint::Min(20),    // Description
        ratatui::layout::Constraint::Length(8),  // Assets
    ];

    // Header row
    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Assets").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    // Data rows
    let rows: Vec<Row> = summaries
        .iter()
        .map(|summary| {
            Row::new(vec![
                Cell::from(truncate_string(&summary.department.name, 24)),
                Cell::from(truncate_string(&summary.department.description, 40)),
                Cell::from(format!("{}", summary.asset_count))
                    .style(Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_department_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum length
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
