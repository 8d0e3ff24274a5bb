//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use std::fs::File;
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{Asset, Department, MaintenanceRecord};
use crate::reports::AssetStatusReport;
use crate::services::{AssetService, DepartmentService, MaintenanceService};

use super::app::{ActiveDialog, ActiveView, App, DepartmentFilter, FocusedPanel, InputMode};
use super::confirm::ConfirmOptions;
use super::dialogs;
use super::event::Event;
use super::widgets::notification::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) => Ok(()),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::ActionSettled { ticket, outcome } => {
            let succeeded = outcome.is_ok();
            if app.confirm.settle(ticket, outcome) && succeeded {
                sync_selection(app);
            }
            Ok(())
        }
        Event::Notify(notification) => {
            app.notify(notification);
            Ok(())
        }
    }
}

/// Route a key event based on application state
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // The confirmation surface captures all input while it is visible
    if app.confirm.is_active() {
        return handle_confirm_key(app, key);
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

/// Keys while a confirmation is showing
///
/// Confirm hands the action to a worker thread and moves the flow to
/// running; the settled outcome comes back through the event channel.
/// Cancel is ignored while the action runs.
fn handle_confirm_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some((ticket, action)) = app.confirm.begin_confirm() {
                let tx = app.event_sender();
                thread::spawn(move || {
                    let outcome = action();
                    let _ = tx.send(Event::ActionSettled { ticket, outcome });
                });
            }
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.confirm.dismiss();
        }
        _ => {}
    }
    Ok(())
}

/// Keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes help
            app.close_dialog();
        }
        ActiveDialog::AddDepartment | ActiveDialog::EditDepartment(_) => {
            dialogs::department::handle_key(app, key);
        }
        ActiveDialog::AddAsset | ActiveDialog::EditAsset(_) => {
            dialogs::asset::handle_key(app, key);
        }
        ActiveDialog::AddMaintenance => {
            dialogs::maintenance::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys first
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char('h') => {
            app.focused_panel = FocusedPanel::Sidebar;
            return Ok(());
        }
        KeyCode::Char('l') => {
            app.focused_panel = FocusedPanel::Main;
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Dashboard);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Departments);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Assets);
            return Ok(());
        }
        KeyCode::Char('4') => {
            app.switch_view(ActiveView::Maintenance);
            return Ok(());
        }
        KeyCode::Char('5') => {
            app.switch_view(ActiveView::Reports);
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_key(app, key),
    }
}

/// Keys when the sidebar has focus
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let departments = visible_departments(app);
            if app.selected_department_index + 1 < departments.len() {
                app.selected_department_index += 1;
            }
            app.selected_department = departments
                .get(app.selected_department_index)
                .map(|d| d.id);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.selected_department_index > 0 {
                app.selected_department_index -= 1;
            }
            let departments = visible_departments(app);
            app.selected_department = departments
                .get(app.selected_department_index)
                .map(|d| d.id);
        }
        KeyCode::Enter => {
            // Jump to the assets view filtered to the selected department
            let departments = visible_departments(app);
            if let Some(department) = departments.get(app.selected_department_index) {
                app.department_filter = DepartmentFilter::Department(department.id);
                app.switch_view(ActiveView::Assets);
                app.focused_panel = FocusedPanel::Main;
            }
        }
        KeyCode::Char('a') => {
            app.open_dialog(ActiveDialog::AddDepartment);
        }
        KeyCode::Char('e') => {
            let departments = visible_departments(app);
            if let Some(department) = departments.get(app.selected_department_index) {
                app.open_dialog(ActiveDialog::EditDepartment(department.id));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Keys when the main panel has focus
fn handle_main_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_view {
        ActiveView::Dashboard => Ok(()),
        ActiveView::Departments => handle_departments_key(app, key),
        ActiveView::Assets => handle_assets_key(app, key),
        ActiveView::Maintenance => handle_maintenance_key(app, key),
        ActiveView::Reports => handle_reports_key(app, key),
    }
}

/// Keys in the departments view
fn handle_departments_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            request_department_delete(app);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let departments = visible_departments(app);
            app.move_down(departments.len());
            app.selected_department = departments
                .get(app.selected_department_index)
                .map(|d| d.id);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            let departments = visible_departments(app);
            app.selected_department = departments
                .get(app.selected_department_index)
                .map(|d| d.id);
        }
        KeyCode::Char('a') => {
            app.open_dialog(ActiveDialog::AddDepartment);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            let departments = visible_departments(app);
            if let Some(department) = departments.get(app.selected_department_index) {
                app.open_dialog(ActiveDialog::EditDepartment(department.id));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Keys in the assets view
fn handle_assets_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            request_asset_delete(app);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let assets = visible_assets(app);
            app.move_down(assets.len());
            app.selected_asset = assets.get(app.selected_asset_index).map(|a| a.id);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            let assets = visible_assets(app);
            app.selected_asset = assets.get(app.selected_asset_index).map(|a| a.id);
        }
        KeyCode::Char('a') => {
            app.open_dialog(ActiveDialog::AddAsset);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            let assets = visible_assets(app);
            if let Some(asset) = assets.get(app.selected_asset_index) {
                app.open_dialog(ActiveDialog::EditAsset(asset.id));
            }
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.set_status("Search: type to filter, Enter or Esc to finish");
        }
        KeyCode::Char('f') => {
            app.cycle_department_filter();
        }
        KeyCode::Esc => {
            app.clear_asset_filters();
        }
        _ => {}
    }
    Ok(())
}

/// Keys in the maintenance view
fn handle_maintenance_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            request_maintenance_delete(app);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let records = visible_maintenance(app);
            app.move_down(records.len());
            app.selected_maintenance = records
                .get(app.selected_maintenance_index)
                .map(|r| r.id);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            let records = visible_maintenance(app);
            app.selected_maintenance = records
                .get(app.selected_maintenance_index)
                .map(|r| r.id);
        }
        KeyCode::Char('a') => {
            app.open_dialog(ActiveDialog::AddMaintenance);
        }
        _ => {}
    }
    Ok(())
}

/// Keys in the reports view
fn handle_reports_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('x') {
        export_asset_report(app);
    }
    Ok(())
}

/// Keys in editing mode with no dialog open
///
/// Dialogs normally own editing mode; this is the fallback if state
/// gets out of sync.
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Esc {
        app.input_mode = InputMode::Normal;
    }
    Ok(())
}

/// Keys while typing in the asset search bar
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.clear_status();
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.selected_asset_index = 0;
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            app.selected_asset_index = 0;
        }
        _ => {}
    }
    Ok(())
}

/// Ask to delete the selected department
fn request_department_delete(app: &mut App) {
    let departments = visible_departments(app);
    let Some(department) = departments.get(app.selected_department_index).cloned() else {
        return;
    };

    let storage = Arc::clone(&app.storage);
    let tx = app.event_sender();
    let id = department.id;

    let options = ConfirmOptions::new(
        "Delete Department",
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone and will remove the department from all associated assets.",
            department.name
        ),
    )
    .with_confirm_label("Delete Department")
    .with_action(move || {
        let service = DepartmentService::new(&storage);
        match service.delete(id) {
            Ok(_) => {
                let _ = tx.send(Event::Notify(Notification::success(
                    "Department deleted successfully",
                )));
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                let _ = tx.send(Event::Notify(Notification::error(reason.clone())));
                Err(reason)
            }
        }
    });

    app.confirm.request(options);
}

/// Ask to delete the selected asset
fn request_asset_delete(app: &mut App) {
    let assets = visible_assets(app);
    let Some(asset) = assets.get(app.selected_asset_index).cloned() else {
        return;
    };

    let storage = Arc::clone(&app.storage);
    let tx = app.event_sender();
    let id = asset.id;

    let options = ConfirmOptions::new(
        "Delete Asset",
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone and its maintenance history will be removed with it.",
            asset.name
        ),
    )
    .with_confirm_label("Delete Asset")
    .with_action(move || {
        let service = AssetService::new(&storage);
        match service.delete(id) {
            Ok(_) => {
                let _ = tx.send(Event::Notify(Notification::success(
                    "Asset deleted successfully",
                )));
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                let _ = tx.send(Event::Notify(Notification::error(reason.clone())));
                Err(reason)
            }
        }
    });

    app.confirm.request(options);
}

/// Ask to delete the selected maintenance record
fn request_maintenance_delete(app: &mut App) {
    let records = visible_maintenance(app);
    let Some(record) = records.get(app.selected_maintenance_index).cloned() else {
        return;
    };

    let storage = Arc::clone(&app.storage);
    let tx = app.event_sender();
    let id = record.id;

    let options = ConfirmOptions::new(
        "Delete Maintenance Record",
        "Are you sure you want to delete this maintenance record?",
    )
    .with_action(move || {
        let service = MaintenanceService::new(&storage);
        match service.delete(id) {
            Ok(_) => {
                let _ = tx.send(Event::Notify(Notification::success(
                    "Maintenance record deleted successfully",
                )));
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                let _ = tx.send(Event::Notify(Notification::error(reason.clone())));
                Err(reason)
            }
        }
    });

    app.confirm.request(options);
}

/// Export the asset status report as CSV into the exports directory
fn export_asset_report(app: &mut App) {
    let report = match AssetStatusReport::generate(&app.storage) {
        Ok(report) => report,
        Err(e) => {
            app.notify(Notification::error(format!("Report failed: {}", e)));
            return;
        }
    };

    if let Err(e) = app.paths.ensure_directories() {
        app.notify(Notification::error(format!("Export failed: {}", e)));
        return;
    }

    let filename = format!(
        "asset-report-{}.csv",
        report.generated_on.format("%Y-%m-%d")
    );
    let path = app.paths.export_dir().join(filename);

    let result = File::create(&path)
        .map_err(|e| e.to_string())
        .and_then(|mut file| report.export_csv(&mut file).map_err(|e| e.to_string()));

    match result {
        Ok(()) => {
            app.notify(Notification::success(format!(
                "Report exported to {}",
                path.display()
            )));
        }
        Err(e) => {
            app.notify(Notification::error(format!("Export failed: {}", e)));
        }
    }
}

/// Re-point selections after a confirmed mutation
///
/// Rows may have disappeared, so the indices are clamped and the
/// selected ids re-derived from whatever now occupies those rows.
fn sync_selection(app: &mut App) {
    let departments = visible_departments(app);
    if app.selected_department_index >= departments.len() {
        app.selected_department_index = departments.len().saturating_sub(1);
    }
    app.selected_department = departments
        .get(app.selected_department_index)
        .map(|d| d.id);

    let assets = visible_assets(app);
    if app.selected_asset_index >= assets.len() {
        app.selected_asset_index = assets.len().saturating_sub(1);
    }
    app.selected_asset = assets.get(app.selected_asset_index).map(|a| a.id);

    let records = visible_maintenance(app);
    if app.selected_maintenance_index >= records.len() {
        app.selected_maintenance_index = records.len().saturating_sub(1);
    }
    app.selected_maintenance = records
        .get(app.selected_maintenance_index)
        .map(|r| r.id);
}

/// Departments in list order
fn visible_departments(app: &App) -> Vec<Department> {
    DepartmentService::new(&app.storage)
        .list()
        .unwrap_or_default()
}

/// Assets in table order, with search and department filter applied
fn visible_assets(app: &App) -> Vec<Asset> {
    AssetService::new(&app.storage)
        .list_filtered(&app.search_query, None)
        .unwrap_or_default()
        .into_iter()
        .filter(|asset| app.department_filter.matches(asset.department_id))
        .collect()
}

/// Maintenance records in table order, newest first
fn visible_maintenance(app: &App) -> Vec<MaintenanceRecord> {
    MaintenanceService::new(&app.storage)
        .list()
        .unwrap_or_default()
}
