//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::sync::mpsc;
use std::sync::Arc;

use crate::config::paths::CampusPaths;
use crate::config::settings::Settings;
use crate::models::{AssetId, DepartmentId, MaintenanceId};
use crate::storage::Storage;

use super::confirm::ConfirmFlow;
use super::dialogs::asset::AssetFormState;
use super::dialogs::department::DepartmentFormState;
use super::dialogs::maintenance::MaintenanceFormState;
use super::event::Event;
use super::widgets::notification::{Notification, NotificationQueue};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Departments,
    Assets,
    Maintenance,
    Reports,
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
    Search,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddDepartment,
    EditDepartment(DepartmentId),
    AddAsset,
    EditAsset(AssetId),
    AddMaintenance,
    Help,
}

/// Department filter for the assets view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Department(DepartmentId),
    Unassigned,
}

impl DepartmentFilter {
    /// Whether an asset's department assignment passes the filter
    pub fn matches(self, department_id: Option<DepartmentId>) -> bool {
        match self {
            Self::All => true,
            Self::Department(id) => department_id == Some(id),
            Self::Unassigned => department_id.is_none(),
        }
    }
}

/// Main application state
pub struct App {
    /// The storage layer, shared with confirmation worker threads
    pub storage: Arc<Storage>,

    /// Application settings
    pub settings: Settings,

    /// Paths configuration
    pub paths: CampusPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected department (if any)
    pub selected_department: Option<DepartmentId>,

    /// Selected department index in the list
    pub selected_department_index: usize,

    /// Selected asset (if any)
    pub selected_asset: Option<AssetId>,

    /// Selected asset index in the table
    pub selected_asset_index: usize,

    /// Selected maintenance record (if any)
    pub selected_maintenance: Option<MaintenanceId>,

    /// Selected maintenance index in the table
    pub selected_maintenance_index: usize,

    /// Search query for the assets view
    pub search_query: String,

    /// Department filter for the assets view
    pub department_filter: DepartmentFilter,

    /// Status message to display
    pub status_message: Option<String>,

    /// Confirmation workflow state
    pub confirm: ConfirmFlow,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Department form state
    pub department_form: DepartmentFormState,

    /// Asset form state
    pub asset_form: AssetFormState,

    /// Maintenance form state
    pub maintenance_form: MaintenanceFormState,

    /// Sender for events produced off the UI thread
    event_tx: mpsc::Sender<Event>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        storage: Arc<Storage>,
        settings: Settings,
        paths: CampusPaths,
        event_tx: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            storage,
            settings,
            paths,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_department: None,
            selected_department_index: 0,
            selected_asset: None,
            selected_asset_index: 0,
            selected_maintenance: None,
            selected_maintenance_index: 0,
            search_query: String::new(),
            department_filter: DepartmentFilter::All,
            status_message: None,
            confirm: ConfirmFlow::new(),
            notifications: NotificationQueue::new(),
            department_form: DepartmentFormState::new(),
            asset_form: AssetFormState::new(Vec::new()),
            maintenance_form: MaintenanceFormState::new(Vec::new(), None),
            event_tx,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show a toast notification, displayed for the configured duration
    pub fn notify(&mut self, notification: Notification) {
        self.notifications
            .push(notification.with_duration(self.settings.notification_seconds));
    }

    /// A sender confirmation actions use to report back
    pub fn event_sender(&self) -> mpsc::Sender<Event> {
        self.event_tx.clone()
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;

        // Reset selection based on view
        match view {
            ActiveView::Departments => {
                self.selected_department_index = 0;
            }
            ActiveView::Assets => {
                self.selected_asset_index = 0;
            }
            ActiveView::Maintenance => {
                self.selected_maintenance_index = 0;
            }
            ActiveView::Dashboard | ActiveView::Reports => {}
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog, loading form state for edits
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::AddDepartment => {
                self.department_form = DepartmentFormState::new();
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::EditDepartment(id) => {
                if let Ok(Some(department)) = self.storage.departments.get(id) {
                    self.department_form = DepartmentFormState::from_department(&department);
                }
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::AddAsset => {
                let departments = self.department_choices();
                self.asset_form = AssetFormState::new(departments);
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::EditAsset(id) => {
                if let Ok(Some(asset)) = self.storage.assets.get(id) {
                    let departments = self.department_choices();
                    self.asset_form = AssetFormState::from_asset(&asset, departments);
                }
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::AddMaintenance => {
                let assets = self.asset_choices();
                self.maintenance_form = MaintenanceFormState::new(assets, self.selected_asset);
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Department choices for form selectors, name-sorted
    pub fn department_choices(&self) -> Vec<(DepartmentId, String)> {
        self.storage
            .departments
            .get_all()
            .unwrap_or_default()
            .iter()
            .map(|d| (d.id, d.name.clone()))
            .collect()
    }

    /// Asset choices for form selectors, name-sorted
    pub fn asset_choices(&self) -> Vec<(AssetId, String)> {
        self.storage
            .assets
            .get_all()
            .unwrap_or_default()
            .iter()
            .map(|a| (a.id, a.name.clone()))
            .collect()
    }

    /// Move selection up in the current view
    pub fn move_up(&mut self) {
        match self.active_view {
            ActiveView::Departments => {
                if self.selected_department_index > 0 {
                    self.selected_department_index -= 1;
                }
            }
            ActiveView::Assets => {
                if self.selected_asset_index > 0 {
                    self.selected_asset_index -= 1;
                }
            }
            ActiveView::Maintenance => {
                if self.selected_maintenance_index > 0 {
                    self.selected_maintenance_index -= 1;
                }
            }
            _ => {}
        }
    }

    /// Move selection down in the current view
    pub fn move_down(&mut self, max: usize) {
        match self.active_view {
            ActiveView::Departments => {
                if self.selected_department_index < max.saturating_sub(1) {
                    self.selected_department_index += 1;
                }
            }
            ActiveView::Assets => {
                if self.selected_asset_index < max.saturating_sub(1) {
                    self.selected_asset_index += 1;
                }
            }
            ActiveView::Maintenance => {
                if self.selected_maintenance_index < max.saturating_sub(1) {
                    self.selected_maintenance_index += 1;
                }
            }
            _ => {}
        }
    }

    /// Clear the asset search and department filter
    pub fn clear_asset_filters(&mut self) {
        self.search_query.clear();
        self.department_filter = DepartmentFilter::All;
        self.selected_asset_index = 0;
    }

    /// Cycle the department filter: all, each department in order, unassigned
    pub fn cycle_department_filter(&mut self) {
        let departments = self.department_choices();

        self.department_filter = match self.department_filter {
            DepartmentFilter::All => match departments.first() {
                Some((id, _)) => DepartmentFilter::Department(*id),
                None => DepartmentFilter::Unassigned,
            },
            DepartmentFilter::Department(current) => {
                let pos = departments.iter().position(|(id, _)| *id == current);
                match pos {
                    Some(i) if i + 1 < departments.len() => {
                        DepartmentFilter::Department(departments[i + 1].0)
                    }
                    _ => DepartmentFilter::Unassigned,
                }
            }
            DepartmentFilter::Unassigned => DepartmentFilter::All,
        };
        self.selected_asset_index = 0;
    }

    /// Display label for the current department filter
    pub fn department_filter_label(&self) -> String {
        match self.department_filter {
            DepartmentFilter::All => "All Departments".to_string(),
            DepartmentFilter::Department(id) => self
                .storage
                .departments
                .get(id)
                .ok()
                .flatten()
                .map(|d| d.name)
                .unwrap_or_else(|| "All Departments".to_string()),
            DepartmentFilter::Unassigned => "Unassigned".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_app(settings: Settings) -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Arc::new(Storage::new(paths.clone()).unwrap());
        storage.load_all().unwrap();
        let (tx, _rx) = mpsc::channel();
        let app = App::new(storage, settings, paths, tx);
        (temp_dir, app)
    }

    #[test]
    fn test_notify_uses_configured_duration() {
        let mut settings = Settings::default();
        settings.notification_seconds = 12;
        let (_temp_dir, mut app) = create_test_app(settings);

        app.notify(Notification::success("Asset created successfully"));

        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.duration_secs, 12);
    }

    #[test]
    fn test_notify_default_duration() {
        let (_temp_dir, mut app) = create_test_app(Settings::default());

        app.notify(Notification::error("Something failed"));

        assert_eq!(app.notifications.current().unwrap().duration_secs, 5);
    }
}
