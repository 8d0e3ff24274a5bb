//! Terminal User Interface module
//!
//! This module provides a full-featured TUI for the campus asset manager
//! using ratatui. The TUI includes views for departments, assets,
//! maintenance history, and reports, plus dialogs for data entry and a
//! confirmation workflow for destructive operations.

pub mod app;
pub mod confirm;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
