//! Sidebar view
//!
//! Shows department list and view switcher

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::services::DepartmentService;
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    // Render header
    render_header(frame, app, layout.header);

    // Render department list
    render_departments(frame, app, layout.departments);

    // Render view switcher
    render_view_switcher(frame, app, layout.view_switcher);
}

/// Render sidebar header with the configured institution name
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.settings.university_name))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new("v0.1.0")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render department list with asset counts
fn render_departments(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Departments ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let department_service = DepartmentService::new(&app.storage);
    let summaries = department_service.list_with_counts().unwrap_or_default();

    if summaries.is_empty() {
        let text = Paragraph::new("No departments")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Build list items
    let items: Vec<ListItem> = summaries
        .iter()
        .map(|summary| {
            let count_str = format!("{}", summary.asset_count);

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<20}", truncate_string(&summary.department.name, 20)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>6}", count_str),
                    Style::default().fg(Color::Green),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_department_index));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let views = [
        ("1", "Dashboard", ActiveView::Dashboard),
        ("2", "Departments", ActiveView::Departments),
        ("3", "Assets", ActiveView::Assets),
        ("4", "Maintenance", ActiveView::Maintenance),
        ("5", "Reports", ActiveView::Reports),
    ];

    let items: Vec<ListItem> = views
        .iter()
        .map(|(key, name, view)| {
            let style = if app.active_view == *view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if app.active_view == *view { "▶" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(*name, style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
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
