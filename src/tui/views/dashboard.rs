//! Dashboard view
//!
//! Overview with stat cards and an assets-by-department summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::services::DepartmentService;
use crate::tui::app::App;
use crate::tui::layout::{DashboardLayout, MainPanelLayout};

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, layout.header);

    let dashboard = DashboardLayout::new(layout.content);
    render_stat_cards(frame, app, dashboard.stat_cards);
    render_department_summary(frame, app, dashboard.summary);
}

/// Render dashboard header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Dashboard ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("Overview of your asset management system")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the four stat cards
fn render_stat_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let assets = app.storage.assets.get_all().unwrap_or_default();

    let total = assets.len();
    let missing = assets
        .iter()
        .filter(|a| a.status == crate::models::AssetStatus::Missing)
        .count();
    let transferred = assets
        .iter()
        .filter(|a| a.status == crate::models::AssetStatus::Transferred)
        .count();
    let in_repair = assets
        .iter()
        .filter(|a| a.status == crate::models::AssetStatus::InRepair)
        .count();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_stat_card(frame, cards[0], "Total Assets", total, Color::Cyan);
    render_stat_card(frame, cards[1], "Missing Assets", missing, Color::Red);
    render_stat_card(frame, cards[2], "Transferred", transferred, Color::Yellow);
    render_stat_card(frame, cards[3], "In Repair", in_repair, Color::Magenta);
}

/// Render a single stat card
fn render_stat_card(frame: &mut Frame, area: Rect, title: &str, value: usize, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::White))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let value_line = Line::from(Span::styled(
        format!("{}", value),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(value_line).block(block);

    frame.render_widget(paragraph, area);
}

/// Render the assets-by-department summary
fn render_department_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Assets by Department ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let department_service = DepartmentService::new(&app.storage);
    let summaries = department_service.list_with_counts().unwrap_or_default();

    if summaries.is_empty() {
        let text = Paragraph::new("No departments found. Create a department to get started.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = summaries
        .iter()
        .map(|summary| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<30}", summary.department.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>6}", summary.asset_count),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
