//! Service layer for the campus asset manager
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields, and cross-entity operations.

pub mod asset;
pub mod department;
pub mod import;
pub mod maintenance;

pub use asset::{AssetRow, AssetService};
pub use department::{DepartmentService, DepartmentSummary};
pub use import::{ColumnMapping, ImportService, ImportStatus};
pub use maintenance::{MaintenanceRow, MaintenanceService};
