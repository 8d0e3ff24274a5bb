//! Asset entry dialog
//!
//! Modal dialog for adding and editing assets: text fields, a department
//! selector, a purchase date, and a status selector.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Asset, AssetStatus, DepartmentId};
use crate::services::AssetService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::notification::Notification;

use super::render_text_field;

/// Which field is currently focused in the asset form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetField {
    #[default]
    Name,
    Category,
    SerialNumber,
    Department,
    PurchaseDate,
    Status,
}

impl AssetField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Category => Self::SerialNumber,
            Self::SerialNumber => Self::Department,
            Self::Department => Self::PurchaseDate,
            Self::PurchaseDate => Self::Status,
            Self::Status => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Status,
            Self::Category => Self::Name,
            Self::SerialNumber => Self::Category,
            Self::Department => Self::SerialNumber,
            Self::PurchaseDate => Self::Department,
            Self::Status => Self::PurchaseDate,
        }
    }
}

/// State for the asset form dialog
#[derive(Debug, Clone)]
pub struct AssetFormState {
    /// Currently focused field
    pub focused_field: AssetField,

    /// Name input
    pub name_input: TextInput,

    /// Category input
    pub category_input: TextInput,

    /// Serial number input
    pub serial_input: TextInput,

    /// Purchase date input (YYYY-MM-DD)
    pub date_input: TextInput,

    /// Department choices for the selector
    pub departments: Vec<(DepartmentId, String)>,

    /// Selected department index; 0 is unassigned, 1.. map into choices
    pub department_index: usize,

    /// Selected status index into AssetStatus::ALL
    pub status_index: usize,

    /// Whether this is an edit (vs new asset)
    pub is_edit: bool,

    /// Asset ID being edited (if editing)
    pub editing_id: Option<crate::models::AssetId>,

    /// Error message to display
    pub error_message: Option<String>,
}

impl AssetFormState {
    /// Create a new form state with default values
    pub fn new(departments: Vec<(DepartmentId, String)>) -> Self {
        let today = chrono::Utc::now().date_naive().to_string();
        Self {
            focused_field: AssetField::Name,
            name_input: TextInput::new().placeholder("Asset name"),
            category_input: TextInput::new().placeholder("e.g. Lab Equipment"),
            serial_input: TextInput::new().placeholder("Serial number"),
            date_input: TextInput::new().content(today),
            departments,
            department_index: 0,
            status_index: 0,
            is_edit: false,
            editing_id: None,
            error_message: None,
        }
    }

    /// Create form state pre-populated from an existing asset
    pub fn from_asset(asset: &Asset, departments: Vec<(DepartmentId, String)>) -> Self {
        let department_index = asset
            .department_id
            .and_then(|id| departments.iter().position(|(d, _)| *d == id))
            .map(|i| i + 1)
            .unwrap_or(0);

        let status_index = AssetStatus::ALL
            .iter()
            .position(|s| *s == asset.status)
            .unwrap_or(0);

        Self {
            focused_field: AssetField::Name,
            name_input: TextInput::new().content(&asset.name),
            category_input: TextInput::new().content(&asset.category),
            serial_input: TextInput::new().content(&asset.serial_number),
            date_input: TextInput::new().content(asset.purchase_date.to_string()),
            departments,
            department_index,
            status_index,
            is_edit: true,
            editing_id: Some(asset.id),
            error_message: None,
        }
    }

    /// Get the currently focused text input (if applicable)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            AssetField::Name => Some(&mut self.name_input),
            AssetField::Category => Some(&mut self.category_input),
            AssetField::SerialNumber => Some(&mut self.serial_input),
            AssetField::PurchaseDate => Some(&mut self.date_input),
            AssetField::Department | AssetField::Status => None,
        }
    }

    /// The selected department, None for unassigned
    pub fn selected_department(&self) -> Option<DepartmentId> {
        if self.department_index == 0 {
            None
        } else {
            self.departments
                .get(self.department_index - 1)
                .map(|(id, _)| *id)
        }
    }

    /// The selected department name for display
    pub fn selected_department_name(&self) -> &str {
        if self.department_index == 0 {
            "Unassigned"
        } else {
            self.departments
                .get(self.department_index - 1)
                .map(|(_, name)| name.as_str())
                .unwrap_or("Unassigned")
        }
    }

    /// The selected status
    pub fn selected_status(&self) -> AssetStatus {
        AssetStatus::ALL
            .get(self.status_index)
            .copied()
            .unwrap_or_default()
    }

    /// Cycle the department selector forward
    pub fn next_department(&mut self) {
        self.department_index = (self.department_index + 1) % (self.departments.len() + 1);
    }

    /// Cycle the department selector backward
    pub fn prev_department(&mut self) {
        if self.department_index == 0 {
            self.department_index = self.departments.len();
        } else {
            self.department_index -= 1;
        }
    }

    /// Cycle the status selector forward
    pub fn next_status(&mut self) {
        self.status_index = (self.status_index + 1) % AssetStatus::ALL.len();
    }

    /// Cycle the status selector backward
    pub fn prev_status(&mut self) {
        if self.status_index == 0 {
            self.status_index = AssetStatus::ALL.len() - 1;
        } else {
            self.status_index -= 1;
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

/// Render the asset dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(60, 14, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let title = if app.asset_form.is_edit {
        " Edit Asset "
    } else {
        " Add Asset "
    };

    let block = Block::default()
        .title(title)
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
            Constraint::Length(1), // Name
            Constraint::Length(1), // Category
            Constraint::Length(1), // Serial
            Constraint::Length(1), // Department
            Constraint::Length(1), // Purchase date
            Constraint::Length(1), // Status
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.asset_form;

    render_text_field(
        frame,
        chunks[0],
        "Name",
        form.name_input.value(),
        form.focused_field == AssetField::Name,
        form.name_input.cursor,
        &form.name_input.placeholder,
    );
    render_text_field(
        frame,
        chunks[1],
        "Category",
        form.category_input.value(),
        form.focused_field == AssetField::Category,
        form.category_input.cursor,
        &form.category_input.placeholder,
    );
    render_text_field(
        frame,
        chunks[2],
        "Serial",
        form.serial_input.value(),
        form.focused_field == AssetField::SerialNumber,
        form.serial_input.cursor,
        &form.serial_input.placeholder,
    );

    render_selector(
        frame,
        chunks[3],
        "Department",
        form.selected_department_name(),
        form.focused_field == AssetField::Department,
    );

    render_text_field(
        frame,
        chunks[4],
        "Purchased",
        form.date_input.value(),
        form.focused_field == AssetField::PurchaseDate,
        form.date_input.cursor,
        "YYYY-MM-DD",
    );

    render_selector(
        frame,
        chunks[5],
        "Status",
        &form.selected_status().to_string(),
        form.focused_field == AssetField::Status,
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[7]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Change  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

/// Render a cycling selector field
fn render_selector(frame: &mut Frame, area: ratatui::layout::Rect, label: &str, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let hint = if focused { "  (↑/↓ to change)" } else { "" };

    let line = Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(format!("◂ {} ▸", value), Style::default().fg(Color::White)),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Handle key input for the asset dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab => {
            let form = &mut app.asset_form;
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.focused_field = form.focused_field.prev();
            } else {
                form.focused_field = form.focused_field.next();
            }
        }

        KeyCode::BackTab => {
            let form = &mut app.asset_form;
            form.focused_field = form.focused_field.prev();
        }

        KeyCode::Enter => {
            if let Err(e) = save_asset(app) {
                app.asset_form.set_error(e);
            }
        }

        KeyCode::Up => {
            let form = &mut app.asset_form;
            match form.focused_field {
                AssetField::Department => form.prev_department(),
                AssetField::Status => form.prev_status(),
                _ => {}
            }
        }

        KeyCode::Down => {
            let form = &mut app.asset_form;
            match form.focused_field {
                AssetField::Department => form.next_department(),
                AssetField::Status => form.next_status(),
                _ => {}
            }
        }

        KeyCode::Backspace => {
            let form = &mut app.asset_form;
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }

        KeyCode::Delete => {
            if let Some(input) = app.asset_form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Left => {
            if let Some(input) = app.asset_form.focused_input() {
                input.move_left();
            }
        }

        KeyCode::Right => {
            if let Some(input) = app.asset_form.focused_input() {
                input.move_right();
            }
        }

        KeyCode::Home => {
            if let Some(input) = app.asset_form.focused_input() {
                input.move_start();
            }
        }

        KeyCode::End => {
            if let Some(input) = app.asset_form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Char(c) => {
            let form = &mut app.asset_form;
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Save the asset through the service layer
fn save_asset(app: &mut App) -> Result<(), String> {
    let form = &app.asset_form;

    let name = form.name_input.value().trim().to_string();
    let category = form.category_input.value().trim().to_string();
    let serial = form.serial_input.value().trim().to_string();

    let purchase_date = NaiveDate::parse_from_str(form.date_input.value().trim(), "%Y-%m-%d")
        .map_err(|_| "Purchase date must be YYYY-MM-DD".to_string())?;

    let department_id = form.selected_department();
    let status = form.selected_status();

    let service = AssetService::new(&app.storage);

    if form.is_edit {
        let id = form.editing_id.ok_or("No asset selected")?;
        service
            .update(
                id,
                Some(&name),
                Some(&category),
                Some(&serial),
                Some(department_id),
                Some(purchase_date),
                Some(status),
            )
            .map_err(|e| e.to_string())?;
        app.close_dialog();
        app.notify(Notification::success("Asset updated successfully"));
    } else {
        service
            .create(&name, &category, &serial, department_id, purchase_date, status)
            .map_err(|e| e.to_string())?;
        app.close_dialog();
        app.notify(Notification::success("Asset created successfully"));
    }

    Ok(())
}
