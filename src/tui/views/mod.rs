//! TUI Views module
//!
//! Contains all the main views: dashboard, departments, assets, maintenance,
//! reports, as well as the sidebar and status bar.

pub mod assets;
pub mod dashboard;
pub mod departments;
pub mod maintenance;
pub mod reports;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::Rect;
use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::notification;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render sidebar
    sidebar::render(frame, app, layout.sidebar);

    // Render main view based on active view
    match app.active_view {
        ActiveView::Dashboard => {
            dashboard::render(frame, app, layout.main);
        }
        ActiveView::Departments => {
            departments::render(frame, app, layout.main);
        }
        ActiveView::Assets => {
            assets::render(frame, app, layout.main);
        }
        ActiveView::Maintenance => {
            maintenance::render(frame, app, layout.main);
        }
        ActiveView::Reports => {
            reports::render(frame, app, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }

    // The confirmation surface covers everything else while its slot is full
    if app.confirm.is_active() {
        dialogs::confirm::render(frame, &app.confirm);
    }

    // Toasts go on top, stacked from the top-right corner
    render_notifications(frame, app);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::AddDepartment | ActiveDialog::EditDepartment(_) => {
            dialogs::department::render(frame, app);
        }
        ActiveDialog::AddAsset | ActiveDialog::EditAsset(_) => {
            dialogs::asset::render(frame, app);
        }
        ActiveDialog::AddMaintenance => {
            dialogs::maintenance::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}

/// Render toast notifications in the top-right corner
fn render_notifications(frame: &mut Frame, app: &App) {
    if app.notifications.is_empty() {
        return;
    }

    let area = frame.area();
    let width = 40.min(area.width);
    let height = 4;
    let x = area.width.saturating_sub(width + 1);

    for (i, toast) in app.notifications.iter().take(3).enumerate() {
        let y = 1 + (i as u16) * height;
        if y + height > area.height {
            break;
        }
        let toast_area = Rect::new(x, y, width, height);
        notification::render(frame, toast, toast_area);
    }
}
