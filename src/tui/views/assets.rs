//! Assets view
//!
//! Searchable, filterable table of assets with status coloring.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::AssetStatus;
use crate::services::AssetService;
use crate::tui::app::{App, FocusedPanel, InputMode};
use crate::tui::layout::MainPanelLayout;

/// Render the assets view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, layout.header);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search and filter bar
            Constraint::Min(3),    // Asset table
        ])
        .split(layout.content);

    render_search_bar(frame, app, chunks[0]);
    render_asset_table(frame, app, chunks[1]);
}

/// Render assets header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Assets ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph =
        Paragraph::new("Manage your university assets  (a:Add  e:Edit  Ctrl+d:Delete  /:Search  f:Filter)")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the search input and department filter indicator
fn render_search_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let searching = app.input_mode == InputMode::Search;

    let border_color = if searching { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![];

    if app.search_query.is_empty() && !searching {
        spans.push(Span::styled(
            "Search assets...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            app.search_query.clone(),
            Style::default().fg(Color::White),
        ));
        if searching {
            spans.push(Span::styled(
                " ",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
        }
    }

    // Filter indicator, right side
    let filter_label = format!("  Filter: {} ", app.department_filter_label());
    spans.push(Span::styled(
        filter_label,
        Style::default().fg(Color::Yellow),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// Render asset table
fn render_asset_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let asset_service = AssetService::new(&app.storage);
    let rows_data: Vec<_> = asset_service
        .list_rows(&app.search_query, None)
        .unwrap_or_default()
        .into_iter()
        .filter(|row| app.department_filter.matches(row.asset.department_id))
        .collect();

    if rows_data.is_empty() {
        let text = Paragraph::new("No assets found")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Define column widths
    let widths = [
        ratatui::layout::Constraint::Length(20), // Name
        ratatui::layout::Constraint::Length(16), // Category
        ratatui::layout::Constraint::Length(16), // Serial Number
        ratatui::layout::Constraint::Length(16), // Department
        ratatui::layout::Constraint::Length(13), // Purchase Date
        ratatui::layout::Constraint::Min(10),    // Status
    ];

    // Header row
    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Serial Number").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Department").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Purchase Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Status").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    // Data rows
    let date_format = app.settings.date_format.as_str();
    let rows: Vec<Row> = rows_data
        .iter()
        .map(|row| {
            let department = row.department_name.as_deref().unwrap_or("N/A");
            let status_color = status_color(row.asset.status);

            Row::new(vec![
                Cell::from(truncate_string(&row.asset.name, 20)),
                Cell::from(truncate_string(&row.asset.category, 16)),
                Cell::from(truncate_string(&row.asset.serial_number, 16)),
                Cell::from(truncate_string(department, 16)),
                Cell::from(row.asset.purchase_date.format(date_format).to_string()),
                Cell::from(row.asset.status.to_string())
                    .style(Style::default().fg(status_color)),
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
    state.select(Some(app.selected_asset_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Color for an asset status cell
fn status_color(status: AssetStatus) -> Color {
    match status {
        AssetStatus::Active => Color::Green,
        AssetStatus::Missing => Color::Red,
        AssetStatus::Transferred => Color::Yellow,
        AssetStatus::InRepair => Color::Magenta,
    }
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
