//! Maintenance view
//!
//! Table of maintenance records, newest first.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::services::MaintenanceService;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the maintenance view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, layout.header);
    render_maintenance_table(frame, app, layout.content);
}

/// Render maintenance header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Maintenance ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("Track asset maintenance history  (a:Add  Ctrl+d:Delete)")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render maintenance table
fn render_maintenance_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let maintenance_service = MaintenanceService::new(&app.storage);
    let rows_data = maintenance_service.list_rows().unwrap_or_default();

    if rows_data.is_empty() {
        let text = Paragraph::new("No maintenance records found")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Define column widths
    let widths = [
        ratatui::layout::Constraint::Length(20), // Asset
        ratatui::layout::Constraint::Length(12), // Date
        ratatui::layout::Constraint::Length(14), // Type
        ratatui::layout::Constraint::Length(16), // Technician
        ratatui::layout::Constraint::Min(10),    // Remarks
    ];

    // Header row
    let header = Row::new(vec![
        Cell::from("Asset").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Type").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Technician").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Remarks").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    // Data rows
    let date_format = app.settings.date_format.as_str();
    let rows: Vec<Row> = rows_data
        .iter()
        .map(|row| {
            let asset_name = row.asset_name.as_deref().unwrap_or("Unknown");
            let remarks = if row.record.remarks.is_empty() {
                "—"
            } else {
                row.record.remarks.as_str()
            };

            Row::new(vec![
                Cell::from(truncate_string(asset_name, 20)),
                Cell::from(row.record.maintenance_date.format(date_format).to_string()),
                Cell::from(truncate_string(&row.record.kind, 14)),
                Cell::from(truncate_string(&row.record.technician, 16)),
                Cell::from(truncate_string(remarks, 40)),
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
    state.select(Some(app.selected_maintenance_index));

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
