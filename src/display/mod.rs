//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and detail views.

pub mod asset;
pub mod department;
pub mod maintenance;

pub use asset::{format_asset_details, format_asset_list};
pub use department::{format_department_details, format_department_list};
pub use maintenance::{format_maintenance_history, format_maintenance_list};
