//! Storage initialization
//!
//! Handles first-run setup of the data directory

use crate::config::paths::CampusPaths;
use crate::config::settings::Settings;
use crate::error::CampusError;

use super::assets::AssetRepository;
use super::departments::DepartmentRepository;
use super::maintenance::MaintenanceRepository;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout, empty collection files, and a default
/// settings file. Existing files are never overwritten.
pub fn initialize_storage(paths: &CampusPaths) -> Result<(), CampusError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    if !paths.departments_file().exists() {
        DepartmentRepository::new(paths.departments_file()).save()?;
    }
    if !paths.assets_file().exists() {
        AssetRepository::new(paths.assets_file()).save()?;
    }
    if !paths.maintenance_file().exists() {
        MaintenanceRepository::new(paths.maintenance_file()).save()?;
    }

    // Write config.json with defaults when missing
    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &CampusPaths) -> bool {
    !paths.is_initialized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.departments_file().exists());
        assert!(paths.assets_file().exists());
        assert!(paths.maintenance_file().exists());
        assert!(paths.settings_file().exists());
        assert!(paths.export_dir().exists());
    }

    #[test]
    fn test_initialized_store_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let storage = Storage::new(CampusPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage.load_all().unwrap();

        assert_eq!(storage.departments.count().unwrap(), 0);
        assert_eq!(storage.assets.count().unwrap(), 0);
        assert_eq!(storage.maintenance.count().unwrap(), 0);
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());

        // First initialization
        initialize_storage(&paths).unwrap();

        // Add a department and persist it
        let repo = DepartmentRepository::new(paths.departments_file());
        repo.upsert(crate::models::Department::new("Library Services")).unwrap();
        repo.save().unwrap();

        // Second initialization should not overwrite
        initialize_storage(&paths).unwrap();

        let reloaded = DepartmentRepository::new(paths.departments_file());
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 1);
    }
}
