//! Department repository for JSON storage
//!
//! Manages loading and saving departments to departments.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CampusError;
use crate::models::{Department, DepartmentId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable department data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct DepartmentData {
    departments: Vec<Department>,
}

/// Repository for department persistence
pub struct DepartmentRepository {
    path: PathBuf,
    data: RwLock<HashMap<DepartmentId, Department>>,
}

impl DepartmentRepository {
    /// Create a new department repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load departments from disk
    pub fn load(&self) -> Result<(), CampusError> {
        let file_data: DepartmentData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for department in file_data.departments {
            data.insert(department.id, department);
        }

        Ok(())
    }

    /// Save departments to disk
    pub fn save(&self) -> Result<(), CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = DepartmentData {
            departments: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a department by ID
    pub fn get(&self, id: DepartmentId) -> Result<Option<Department>, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all departments, sorted by name
    pub fn get_all(&self) -> Result<Vec<Department>, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut departments: Vec<_> = data.values().cloned().collect();
        departments.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(departments)
    }

    /// Get a department by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Department>, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|d| d.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a department
    pub fn upsert(&self, department: Department) -> Result<(), CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(department.id, department);
        Ok(())
    }

    /// Replace the entire collection, used by full-database restore
    pub fn replace_all(&self, departments: Vec<Department>) -> Result<(), CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for department in departments {
            data.insert(department.id, department);
        }

        Ok(())
    }

    /// Delete a department
    pub fn delete(&self, id: DepartmentId) -> Result<bool, CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a department exists
    pub fn exists(&self, id: DepartmentId) -> Result<bool, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Check if a department name is already taken
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<DepartmentId>,
    ) -> Result<bool, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|d| d.name.to_lowercase() == name_lower && Some(d.id) != exclude_id))
    }

    /// Count departments
    pub fn count(&self) -> Result<usize, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, DepartmentRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("departments.json");
        let repo = DepartmentRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let department = Department::new("Physics");
        let id = department.id;

        repo.upsert(department).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Physics");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let department = Department::with_description("Chemistry", "Building C");
        let id = department.id;

        repo.load().unwrap();
        repo.upsert(department).unwrap();
        repo.save().unwrap();

        // Create new repo and load
        let path = temp_dir.path().join("departments.json");
        let repo2 = DepartmentRepository::new(path);
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Chemistry");
        assert_eq!(retrieved.description, "Building C");
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Department::new("Zoology")).unwrap();
        repo.upsert(Department::new("anthropology")).unwrap();
        repo.upsert(Department::new("Mathematics")).unwrap();

        let all = repo.get_all().unwrap();
        let names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["anthropology", "Mathematics", "Zoology"]);
    }

    #[test]
    fn test_get_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Department::new("Fine Arts")).unwrap();

        // Case insensitive
        let found = repo.get_by_name("fine arts").unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Fine Arts");

        let not_found = repo.get_by_name("other").unwrap();
        assert!(not_found.is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let department = Department::new("Temp");
        let id = department.id;

        repo.upsert(department).unwrap();
        assert!(repo.exists(id).unwrap());

        assert!(repo.delete(id).unwrap());
        assert!(!repo.exists(id).unwrap());

        // Deleting again reports nothing removed
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_replace_all() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Department::new("Old")).unwrap();
        repo.replace_all(vec![Department::new("New A"), Department::new("New B")])
            .unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        assert!(repo.get_by_name("Old").unwrap().is_none());
        assert!(repo.get_by_name("New A").unwrap().is_some());
    }

    #[test]
    fn test_name_exists() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let department = Department::new("Engineering");
        let id = department.id;
        repo.upsert(department).unwrap();

        // Name exists
        assert!(repo.name_exists("engineering", None).unwrap());

        // Exclude self
        assert!(!repo.name_exists("engineering", Some(id)).unwrap());

        // Different name
        assert!(!repo.name_exists("other", None).unwrap());
    }
}
