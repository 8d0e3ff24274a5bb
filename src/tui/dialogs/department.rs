//! Department entry dialog
//!
//! Modal dialog for adding and editing departments with form fields,
//! tab navigation, validation, and save/cancel functionality.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Department;
use crate::services::DepartmentService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::notification::Notification;

use super::render_text_field;

/// Which field is currently focused in the department form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentField {
    #[default]
    Name,
    Description,
}

impl DepartmentField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        self.next()
    }
}

/// State for the department form dialog
#[derive(Debug, Clone)]
pub struct DepartmentFormState {
    /// Currently focused field
    pub focused_field: DepartmentField,

    /// Name input
    pub name_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Whether this is an edit (vs new department)
    pub is_edit: bool,

    /// Department ID being edited (if editing)
    pub editing_id: Option<crate::models::DepartmentId>,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for DepartmentFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl DepartmentFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        Self {
            focused_field: DepartmentField::Name,
            name_input: TextInput::new().placeholder("Department name"),
            description_input: TextInput::new().placeholder("Optional description"),
            is_edit: false,
            editing_id: None,
            error_message: None,
        }
    }

    /// Create form state pre-populated from an existing department
    pub fn from_department(department: &Department) -> Self {
        Self {
            focused_field: DepartmentField::Name,
            name_input: TextInput::new().content(&department.name),
            description_input: TextInput::new().content(&department.description),
            is_edit: true,
            editing_id: Some(department.id),
            error_message: None,
        }
    }

    /// Get the currently focused text input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            DepartmentField::Name => &mut self.name_input,
            DepartmentField::Description => &mut self.description_input,
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

/// Render the department dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(56, 10, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let title = if app.department_form.is_edit {
        " Edit Department "
    } else {
        " Add Department "
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
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.department_form;

    render_text_field(
        frame,
        chunks[0],
        "Name",
        form.name_input.value(),
        form.focused_field == DepartmentField::Name,
        form.name_input.cursor,
        &form.name_input.placeholder,
    );
    render_text_field(
        frame,
        chunks[1],
        "Description",
        form.description_input.value(),
        form.focused_field == DepartmentField::Description,
        form.description_input.cursor,
        &form.description_input.placeholder,
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[3]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Handle key input for the department dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab => {
            let form = &mut app.department_form;
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.focused_field = form.focused_field.prev();
            } else {
                form.focused_field = form.focused_field.next();
            }
        }

        KeyCode::BackTab => {
            let form = &mut app.department_form;
            form.focused_field = form.focused_field.prev();
        }

        KeyCode::Enter => {
            if let Err(e) = save_department(app) {
                app.department_form.set_error(e);
            }
        }

        KeyCode::Backspace => {
            let form = &mut app.department_form;
            form.clear_error();
            form.focused_input().backspace();
        }

        KeyCode::Delete => {
            app.department_form.focused_input().delete();
        }

        KeyCode::Left => {
            app.department_form.focused_input().move_left();
        }

        KeyCode::Right => {
            app.department_form.focused_input().move_right();
        }

        KeyCode::Home => {
            app.department_form.focused_input().move_start();
        }

        KeyCode::End => {
            app.department_form.focused_input().move_end();
        }

        KeyCode::Char(c) => {
            let form = &mut app.department_form;
            form.clear_error();
            form.focused_input().insert(c);
        }

        _ => {}
    }
}

/// Save the department through the service layer
fn save_department(app: &mut App) -> Result<(), String> {
    let name = app.department_form.name_input.value().trim().to_string();
    let description = app
        .department_form
        .description_input
        .value()
        .trim()
        .to_string();

    let service = DepartmentService::new(&app.storage);

    if app.department_form.is_edit {
        let id = app
            .department_form
            .editing_id
            .ok_or("No department selected")?;
        service
            .update(id, Some(&name), Some(&description))
            .map_err(|e| e.to_string())?;
        app.close_dialog();
        app.notify(Notification::success("Department updated successfully"));
    } else {
        service
            .create(&name, &description)
            .map_err(|e| e.to_string())?;
        app.close_dialog();
        app.notify(Notification::success("Department created successfully"));
    }

    Ok(())
}
