//! Export module for the campus asset manager
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: For asset, department, and maintenance tables (spreadsheet-compatible)
//! - JSON: For machine-readable full database export
//! - YAML: For human-readable full database export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_assets_csv, export_departments_csv, export_maintenance_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
