//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod asset;
pub mod audit;
pub mod department;
pub mod export;
pub mod import;
pub mod maintenance;
pub mod report;

pub use asset::{handle_asset_command, AssetCommands};
pub use audit::{handle_audit_command, AuditCommands};
pub use department::{handle_department_command, DepartmentCommands};
pub use export::{handle_export_command, ExportCommands};
pub use import::{handle_import_command, ImportCommands};
pub use maintenance::{handle_maintenance_command, MaintenanceCommands};
pub use report::{handle_report_command, ReportCommands};
