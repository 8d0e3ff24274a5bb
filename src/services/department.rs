//! Department service
//!
//! Provides business logic for department management including CRUD
//! operations, duplicate checks, and asset detachment on delete.

use crate::audit::{generate_diff, EntityType};
use crate::error::{CampusError, CampusResult};
use crate::models::{Department, DepartmentId};
use crate::storage::Storage;

/// Service for department management
pub struct DepartmentService<'a> {
    storage: &'a Storage,
}

/// A department with its computed asset count
#[derive(Debug, Clone)]
pub struct DepartmentSummary {
    pub department: Department,
    /// Number of assets currently assigned to the department
    pub asset_count: usize,
}

impl<'a> DepartmentService<'a> {
    /// Create a new department service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new department
    pub fn create(&self, name: &str, description: &str) -> CampusResult<Department> {
        // Validate name is not empty
        let name = name.trim();
        if name.is_empty() {
            return Err(CampusError::Validation(
                "Department name cannot be empty".into(),
            ));
        }

        // Check for duplicate name
        if self.storage.departments.name_exists(name, None)? {
            return Err(CampusError::Duplicate {
                entity_type: "Department",
                identifier: name.to_string(),
            });
        }

        let department = Department::with_description(name, description.trim());

        // Validate
        department
            .validate()
            .map_err(|e| CampusError::Validation(e.to_string()))?;

        // Save to storage
        self.storage.departments.upsert(department.clone())?;
        self.storage.departments.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Department,
            department.id.to_string(),
            Some(department.name.clone()),
            &department,
        )?;

        Ok(department)
    }

    /// Get a department by ID
    pub fn get(&self, id: DepartmentId) -> CampusResult<Option<Department>> {
        self.storage.departments.get(id)
    }

    /// Get a department by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> CampusResult<Option<Department>> {
        self.storage.departments.get_by_name(name)
    }

    /// Find a department by name or ID string
    pub fn find(&self, identifier: &str) -> CampusResult<Option<Department>> {
        // Try by name first
        if let Some(department) = self.storage.departments.get_by_name(identifier)? {
            return Ok(Some(department));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<DepartmentId>() {
            return self.storage.departments.get(id);
        }

        Ok(None)
    }

    /// Get all departments, sorted by name
    pub fn list(&self) -> CampusResult<Vec<Department>> {
        self.storage.departments.get_all()
    }

    /// Get all departments with their asset counts
    pub fn list_with_counts(&self) -> CampusResult<Vec<DepartmentSummary>> {
        let departments = self.list()?;
        let mut summaries = Vec::with_capacity(departments.len());

        for department in departments {
            let asset_count = self.storage.assets.get_by_department(department.id)?.len();
            summaries.push(DepartmentSummary {
                department,
                asset_count,
            });
        }

        Ok(summaries)
    }

    /// Number of assets assigned to a department
    pub fn asset_count(&self, id: DepartmentId) -> CampusResult<usize> {
        Ok(self.storage.assets.get_by_department(id)?.len())
    }

    /// Update a department's name and/or description
    pub fn update(
        &self,
        id: DepartmentId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> CampusResult<Department> {
        let mut department = self
            .storage
            .departments
            .get(id)?
            .ok_or_else(|| CampusError::department_not_found(id.to_string()))?;

        let before = department.clone();

        // Update name if provided
        if let Some(new_name) = name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(CampusError::Validation(
                    "Department name cannot be empty".into(),
                ));
            }

            // Check for duplicate name (excluding self)
            if self.storage.departments.name_exists(new_name, Some(id))? {
                return Err(CampusError::Duplicate {
                    entity_type: "Department",
                    identifier: new_name.to_string(),
                });
            }

            department.rename(new_name);
        }

        if let Some(new_description) = description {
            department.set_description(new_description.trim());
        }

        // Validate
        department
            .validate()
            .map_err(|e| CampusError::Validation(e.to_string()))?;

        // Save
        self.storage.departments.upsert(department.clone())?;
        self.storage.departments.save()?;

        // Audit log
        let diff = generate_diff(
            &serde_json::to_value(&before)?,
            &serde_json::to_value(&department)?,
        );

        self.storage.log_update(
            EntityType::Department,
            department.id.to_string(),
            Some(department.name.clone()),
            &before,
            &department,
            diff,
        )?;

        Ok(department)
    }

    /// Delete a department, detaching any assets assigned to it
    ///
    /// Assets keep their rows; their department assignment is cleared.
    pub fn delete(&self, id: DepartmentId) -> CampusResult<Department> {
        let department = self
            .storage
            .departments
            .get(id)?
            .ok_or_else(|| CampusError::department_not_found(id.to_string()))?;

        // Detach assets before removing the department
        let assigned = self.storage.assets.get_by_department(id)?;
        for mut asset in assigned {
            asset.assign_department(None);
            self.storage.assets.upsert(asset)?;
        }
        self.storage.assets.save()?;

        self.storage.departments.delete(id)?;
        self.storage.departments.save()?;

        // Audit log
        self.storage.log_delete(
            EntityType::Department,
            id.to_string(),
            Some(department.name.clone()),
            &department,
        )?;

        Ok(department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CampusPaths;
    use crate::models::Asset;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn purchase_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_create_department() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        let department = service
            .create("Computer Science", "Teaching labs and offices")
            .unwrap();

        assert_eq!(department.name, "Computer Science");
        assert_eq!(department.description, "Teaching labs and offices");
    }

    #[test]
    fn test_create_duplicate_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        service.create("Physics", "").unwrap();

        // Try to create another with same name, different case
        let result = service.create("physics", "");
        assert!(matches!(result, Err(CampusError::Duplicate { .. })));
    }

    #[test]
    fn test_create_empty_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        let result = service.create("   ", "");
        assert!(matches!(result, Err(CampusError::Validation(_))));
    }

    #[test]
    fn test_find_department() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        let created = service.create("Mechanical Engineering", "").unwrap();

        // Find by name
        let found = service.find("Mechanical Engineering").unwrap().unwrap();
        assert_eq!(found.id, created.id);

        // Case insensitive
        let found = service.find("mechanical engineering").unwrap().unwrap();
        assert_eq!(found.id, created.id);

        // Find by full ID string
        let found = service
            .find(&created.id.as_uuid().to_string())
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
    }

    #[test]
    fn test_list_sorted_by_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        service.create("Zoology", "").unwrap();
        service.create("Astronomy", "").unwrap();

        let departments = service.list().unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(departments[0].name, "Astronomy");
        assert_eq!(departments[1].name, "Zoology");
    }

    #[test]
    fn test_update_department() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        let department = service.create("Old Name", "old description").unwrap();

        let updated = service
            .update(department.id, Some("New Name"), Some("new description"))
            .unwrap();
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.description, "new description");
    }

    #[test]
    fn test_update_duplicate_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        service.create("Chemistry", "").unwrap();
        let biology = service.create("Biology", "").unwrap();

        let result = service.update(biology.id, Some("Chemistry"), None);
        assert!(matches!(result, Err(CampusError::Duplicate { .. })));
    }

    #[test]
    fn test_delete_detaches_assets() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        let department = service.create("Facilities", "").unwrap();

        let mut asset = Asset::new("Floor Polisher", "Equipment", "FP-100", purchase_date());
        asset.assign_department(Some(department.id));
        storage.assets.upsert(asset.clone()).unwrap();
        storage.assets.save().unwrap();

        service.delete(department.id).unwrap();

        // Department is gone
        assert!(service.get(department.id).unwrap().is_none());

        // Asset survives without a department
        let orphaned = storage.assets.get(asset.id).unwrap().unwrap();
        assert_eq!(orphaned.department_id, None);
    }

    #[test]
    fn test_delete_missing_department() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        let result = service.delete(DepartmentId::new());
        assert!(matches!(result, Err(CampusError::NotFound { .. })));
    }

    #[test]
    fn test_list_with_counts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepartmentService::new(&storage);

        let department = service.create("Athletics", "").unwrap();

        let mut asset = Asset::new("Treadmill", "Gym Equipment", "TM-01", purchase_date());
        asset.assign_department(Some(department.id));
        storage.assets.upsert(asset).unwrap();

        let summaries = service.list_with_counts().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].asset_count, 1);
    }
}
