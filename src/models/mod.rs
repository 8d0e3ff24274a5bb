//! Core data models for campus-assets-cli
//!
//! This module contains all the data structures that represent the asset
//! tracking domain: departments, assets, and maintenance records.

pub mod asset;
pub mod department;
pub mod ids;
pub mod maintenance;

pub use asset::{Asset, AssetStatus};
pub use department::Department;
pub use ids::{AssetId, DepartmentId, MaintenanceId};
pub use maintenance::MaintenanceRecord;
