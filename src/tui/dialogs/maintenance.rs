//! Maintenance record dialog
//!
//! Modal dialog for logging a maintenance event against an asset.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::AssetId;
use crate::services::MaintenanceService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::notification::Notification;

use super::render_text_field;

/// Which field is currently focused in the maintenance form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaintenanceField {
    #[default]
    Asset,
    Date,
    Kind,
    Technician,
    Remarks,
}

impl MaintenanceField {
    pub fn next(self) -> Self {
        match self {
            Self::Asset => Self::Date,
            Self::Date => Self::Kind,
            Self::Kind => Self::Technician,
            Self::Technician => Self::Remarks,
            Self::Remarks => Self::Asset,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Asset => Self::Remarks,
            Self::Date => Self::Asset,
            Self::Kind => Self::Date,
            Self::Technician => Self::Kind,
            Self::Remarks => Self::Technician,
        }
    }
}

/// State for the maintenance form dialog
#[derive(Debug, Clone)]
pub struct MaintenanceFormState {
    /// Currently focused field
    pub focused_field: MaintenanceField,

    /// Asset choices for the selector
    pub assets: Vec<(AssetId, String)>,

    /// Selected asset index into the choices
    pub asset_index: usize,

    /// Maintenance date input (YYYY-MM-DD)
    pub date_input: TextInput,

    /// Maintenance type input
    pub kind_input: TextInput,

    /// Technician input
    pub technician_input: TextInput,

    /// Remarks input
    pub remarks_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl MaintenanceFormState {
    /// Create a new form state, optionally preselecting an asset
    pub fn new(assets: Vec<(AssetId, String)>, preselect: Option<AssetId>) -> Self {
        let asset_index = preselect
            .and_then(|id| assets.iter().position(|(a, _)| *a == id))
            .unwrap_or(0);
        let today = chrono::Utc::now().date_naive().to_string();

        Self {
            focused_field: MaintenanceField::Asset,
            assets,
            asset_index,
            date_input: TextInput::new().content(today),
            kind_input: TextInput::new().placeholder("e.g. Repair, Inspection"),
            technician_input: TextInput::new().placeholder("Technician name"),
            remarks_input: TextInput::new().placeholder("Optional remarks"),
            error_message: None,
        }
    }

    /// Get the currently focused text input (if applicable)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            MaintenanceField::Date => Some(&mut self.date_input),
            MaintenanceField::Kind => Some(&mut self.kind_input),
            MaintenanceField::Technician => Some(&mut self.technician_input),
            MaintenanceField::Remarks => Some(&mut self.remarks_input),
            MaintenanceField::Asset => None,
        }
    }

    /// The selected asset, if any exist
    pub fn selected_asset(&self) -> Option<AssetId> {
        self.assets.get(self.asset_index).map(|(id, _)| *id)
    }

    /// The selected asset name for display
    pub fn selected_asset_name(&self) -> &str {
        self.assets
            .get(self.asset_index)
            .map(|(_, name)| name.as_str())
            .unwrap_or("No assets available")
    }

    /// Cycle the asset selector forward
    pub fn next_asset(&mut self) {
        if !self.assets.is_empty() {
            self.asset_index = (self.asset_index + 1) % self.assets.len();
        }
    }

    /// Cycle the asset selector backward
    pub fn prev_asset(&mut self) {
        if !self.assets.is_empty() {
            if self.asset_index == 0 {
                self.asset_index = self.assets.len() - 1;
            } else {
                self.asset_index -= 1;
            }
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the maintenance dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(60, 13, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Log Maintenance ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Asset
            Constraint::Length(1), // Date
            Constraint::Length(1), // Type
            Constraint::Length(1), // Technician
            Constraint::Length(1), // Remarks
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.maintenance_form;

    let asset_focused = form.focused_field == MaintenanceField::Asset;
    let asset_label_style = if asset_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let asset_hint = if asset_focused { "  (↑/↓ to change)" } else { "" };
    let asset_line = Line::from(vec![
        Span::styled("Asset: ", asset_label_style),
        Span::styled(
            format!("◂ {} ▸", form.selected_asset_name()),
            Style::default().fg(Color::White),
        ),
        Span::styled(asset_hint, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(asset_line), chunks[0]);

    render_text_field(
        frame,
        chunks[1],
        "Date",
        form.date_input.value(),
        form.focused_field == MaintenanceField::Date,
        form.date_input.cursor,
        "YYYY-MM-DD",
    );
    render_text_field(
        frame,
        chunks[2],
        "Type",
        form.kind_input.value(),
        form.focused_field == MaintenanceField::Kind,
        form.kind_input.cursor,
        &form.kind_input.placeholder,
    );
    render_text_field(
        frame,
        chunks[3],
        "Technician",
        form.technician_input.value(),
        form.focused_field == MaintenanceField::Technician,
        form.technician_input.cursor,
        &form.technician_input.placeholder,
    );
    render_text_field(
        frame,
        chunks[4],
        "Remarks",
        form.remarks_input.value(),
        form.focused_field == MaintenanceField::Remarks,
        form.remarks_input.cursor,
        &form.remarks_input.placeholder,
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Handle key input for the maintenance dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab => {
            let form = &mut app.maintenance_form;
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.focused_field = form.focused_field.prev();
            } else {
                form.focused_field = form.focused_field.next();
            }
        }

        KeyCode::BackTab => {
            let form = &mut app.maintenance_form;
            form.focused_field = form.focused_field.prev();
        }

        KeyCode::Enter => {
            if let Err(e) = save_maintenance(app) {
                app.maintenance_form.set_error(e);
            }
        }

        KeyCode::Up => {
            if app.maintenance_form.focused_field == MaintenanceField::Asset {
                app.maintenance_form.prev_asset();
            }
        }

        KeyCode::Down => {
            if app.maintenance_form.focused_field == MaintenanceField::Asset {
                app.maintenance_form.next_asset();
            }
        }

        KeyCode::Backspace => {
            let form = &mut app.maintenance_form;
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }

        KeyCode::Delete => {
            if let Some(input) = app.maintenance_form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Left => {
            if let Some(input) = app.maintenance_form.focused_input() {
                input.move_left();
            }
        }

        KeyCode::Right => {
            if let Some(input) = app.maintenance_form.focused_input() {
                input.move_right();
            }
        }

        KeyCode::Home => {
            if let Some(input) = app.maintenance_form.focused_input() {
                input.move_start();
            }
        }

        KeyCode::End => {
            if let Some(input) = app.maintenance_form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Char(c) => {
            let form = &mut app.maintenance_form;
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Save the maintenance record through the service layer
fn save_maintenance(app: &mut App) -> Result<(), String> {
    let form = &app.maintenance_form;

    let asset_id = form
        .selected_asset()
        .ok_or("No asset to log maintenance against")?;

    let date = NaiveDate::parse_from_str(form.date_input.value().trim(), "%Y-%m-%d")
        .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;

    let kind = form.kind_input.value().trim().to_string();
    let technician = form.technician_input.value().trim().to_string();
    let remarks = form.remarks_input.value().trim().to_string();

    let service = MaintenanceService::new(&app.storage);
    service
        .create(asset_id, date, &kind, &technician, &remarks)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.notify(Notification::success("Maintenance record created successfully"));

    Ok(())
}
