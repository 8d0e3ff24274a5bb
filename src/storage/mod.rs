//! Storage layer for the asset registry
//!
//! Provides JSON file storage with atomic writes and automatic
//! directory creation.

pub mod assets;
pub mod departments;
pub mod file_io;
pub mod init;
pub mod maintenance;

pub use assets::AssetRepository;
pub use departments::DepartmentRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use maintenance::MaintenanceRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::CampusPaths;
use crate::error::CampusError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CampusPaths,
    pub departments: DepartmentRepository,
    pub assets: AssetRepository,
    pub maintenance: MaintenanceRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CampusPaths) -> Result<Self, CampusError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            departments: DepartmentRepository::new(paths.departments_file()),
            assets: AssetRepository::new(paths.assets_file()),
            maintenance: MaintenanceRepository::new(paths.maintenance_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CampusPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), CampusError> {
        self.departments.load()?;
        self.assets.load()?;
        self.maintenance.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CampusError> {
        self.departments.save()?;
        self.assets.save()?;
        self.maintenance.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has any data)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        after: &T,
    ) -> Result<(), CampusError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, after);
        self.audit.log(&entry)
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), CampusError> {
        let entry = AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff_summary);
        self.audit.log(&entry)
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
    ) -> Result<(), CampusError> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, before);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("exports").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let dept = Department::new("Physics");
        storage.departments.upsert(dept.clone()).unwrap();
        storage.save_all().unwrap();

        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();

        let loaded = reopened.departments.get(dept.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Physics");
    }

    #[test]
    fn test_log_create_appends_audit_entry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let dept = Department::new("Chemistry");
        storage
            .log_create(
                EntityType::Department,
                dept.id.to_string(),
                Some(dept.name.clone()),
                &dept,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Chemistry"));
    }
}
