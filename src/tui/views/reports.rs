//! Reports view
//!
//! Asset status summary with the flagged-assets table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::AssetStatus;
use crate::reports::AssetStatusReport;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the reports view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, layout.header);

    let report = match AssetStatusReport::generate(&app.storage) {
        Ok(report) => report,
        Err(_) => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(3),    // Flagged table
        ])
        .split(layout.content);

    render_summary(frame, &report, chunks[0]);
    render_flagged_table(frame, &report, chunks[1]);
}

/// Render reports header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Reports ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("View asset summaries and flagged items  (x:Export CSV)")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the summary cards
fn render_summary(frame: &mut Frame, report: &AssetStatusReport, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(frame, cards[0], "Total Assets", report.counts.total, Color::Cyan);
    render_card(frame, cards[1], "Active Assets", report.counts.active, Color::Green);
    render_card(
        frame,
        cards[2],
        "Flagged Assets",
        report.counts.flagged(),
        Color::Red,
    );
}

/// Render a single summary card
fn render_card(frame: &mut Frame, area: Rect, title: &str, value: usize, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::White))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let value_line = Line::from(Span::styled(
        format!("{}", value),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(value_line).block(block), area);
}

/// Render the flagged assets table
fn render_flagged_table(frame: &mut Frame, report: &AssetStatusReport, area: Rect) {
    let block = Block::default()
        .title(" Flagged Assets ")
        .title_style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let flagged = report.flagged_rows();

    if flagged.is_empty() {
        let text = Paragraph::new("No flagged assets")
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
        ratatui::layout::Constraint::Min(10),    // Status
    ];

    // Header row
    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Serial Number").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Department").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Status").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    // Data rows
    let rows: Vec<Row> = flagged
        .iter()
        .map(|row| {
            let status_color = match row.status {
                AssetStatus::Missing => Color::Red,
                AssetStatus::Transferred => Color::Yellow,
                AssetStatus::InRepair => Color::Magenta,
                AssetStatus::Active => Color::Green,
            };

            Row::new(vec![
                Cell::from(truncate_string(&row.name, 20)),
                Cell::from(truncate_string(&row.category, 16)),
                Cell::from(truncate_string(&row.serial_number, 16)),
                Cell::from(truncate_string(row.department.as_deref().unwrap_or("N/A"), 16)),
                Cell::from(row.status.to_string()).style(Style::default().fg(status_color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
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
