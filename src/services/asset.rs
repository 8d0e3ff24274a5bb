//! Asset service
//!
//! Provides business logic for asset management including CRUD operations,
//! serial number uniqueness, department assignment, and search.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{CampusError, CampusResult};
use crate::models::{Asset, AssetId, AssetStatus, DepartmentId};
use crate::storage::Storage;

/// Service for asset management
pub struct AssetService<'a> {
    storage: &'a Storage,
}

/// An asset with its department name resolved for display
#[derive(Debug, Clone)]
pub struct AssetRow {
    pub asset: Asset,
    /// None when the asset is unassigned or the department no longer exists
    pub department_name: Option<String>,
}

impl<'a> AssetService<'a> {
    /// Create a new asset service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new asset
    pub fn create(
        &self,
        name: &str,
        category: &str,
        serial_number: &str,
        department_id: Option<DepartmentId>,
        purchase_date: NaiveDate,
        status: AssetStatus,
    ) -> CampusResult<Asset> {
        let serial_number = serial_number.trim();

        // Check for duplicate serial number
        if self.storage.assets.serial_exists(serial_number, None)? {
            return Err(CampusError::Duplicate {
                entity_type: "Asset",
                identifier: serial_number.to_string(),
            });
        }

        // Verify the department exists before assigning
        if let Some(dept_id) = department_id {
            self.storage
                .departments
                .get(dept_id)?
                .ok_or_else(|| CampusError::department_not_found(dept_id.to_string()))?;
        }

        let mut asset = Asset::new(name.trim(), category.trim(), serial_number, purchase_date);
        asset.assign_department(department_id);
        asset.set_status(status);

        // Validate
        asset
            .validate()
            .map_err(|e| CampusError::Validation(e.to_string()))?;

        // Save to storage
        self.storage.assets.upsert(asset.clone())?;
        self.storage.assets.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Asset,
            asset.id.to_string(),
            Some(asset.name.clone()),
            &asset,
        )?;

        Ok(asset)
    }

    /// Get an asset by ID
    pub fn get(&self, id: AssetId) -> CampusResult<Option<Asset>> {
        self.storage.assets.get(id)
    }

    /// Get an asset by serial number (case-insensitive)
    pub fn get_by_serial(&self, serial_number: &str) -> CampusResult<Option<Asset>> {
        self.storage.assets.get_by_serial(serial_number)
    }

    /// Find an asset by serial number or ID string
    pub fn find(&self, identifier: &str) -> CampusResult<Option<Asset>> {
        // Try by serial number first
        if let Some(asset) = self.storage.assets.get_by_serial(identifier)? {
            return Ok(Some(asset));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<AssetId>() {
            return self.storage.assets.get(id);
        }

        Ok(None)
    }

    /// Get all assets, sorted by name
    pub fn list(&self) -> CampusResult<Vec<Asset>> {
        self.storage.assets.get_all()
    }

    /// Get assets matching a search query and optional department filter
    ///
    /// The query matches name or serial number, case-insensitive. An empty
    /// query matches everything.
    pub fn list_filtered(
        &self,
        query: &str,
        department_id: Option<DepartmentId>,
    ) -> CampusResult<Vec<Asset>> {
        let assets = self.storage.assets.get_all()?;
        Ok(assets
            .into_iter()
            .filter(|asset| asset.matches_search(query))
            .filter(|asset| match department_id {
                Some(dept_id) => asset.department_id == Some(dept_id),
                None => true,
            })
            .collect())
    }

    /// Get filtered assets with department names resolved
    pub fn list_rows(
        &self,
        query: &str,
        department_id: Option<DepartmentId>,
    ) -> CampusResult<Vec<AssetRow>> {
        let assets = self.list_filtered(query, department_id)?;
        let mut rows = Vec::with_capacity(assets.len());

        for asset in assets {
            let department_name = match asset.department_id {
                Some(dept_id) => self.storage.departments.get(dept_id)?.map(|d| d.name),
                None => None,
            };
            rows.push(AssetRow {
                asset,
                department_name,
            });
        }

        Ok(rows)
    }

    /// Update an asset
    ///
    /// `department_id` uses a nested Option:
    /// - `None`: no change
    /// - `Some(None)`: clear the assignment
    /// - `Some(Some(id))`: assign to a department
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        id: AssetId,
        name: Option<&str>,
        category: Option<&str>,
        serial_number: Option<&str>,
        department_id: Option<Option<DepartmentId>>,
        purchase_date: Option<NaiveDate>,
        status: Option<AssetStatus>,
    ) -> CampusResult<Asset> {
        let mut asset = self
            .storage
            .assets
            .get(id)?
            .ok_or_else(|| CampusError::asset_not_found(id.to_string()))?;

        let before = asset.clone();

        // Apply updates
        if let Some(new_name) = name {
            asset.name = new_name.trim().to_string();
        }

        if let Some(new_category) = category {
            asset.category = new_category.trim().to_string();
        }

        if let Some(new_serial) = serial_number {
            let new_serial = new_serial.trim();
            if self.storage.assets.serial_exists(new_serial, Some(id))? {
                return Err(CampusError::Duplicate {
                    entity_type: "Asset",
                    identifier: new_serial.to_string(),
                });
            }
            asset.serial_number = new_serial.to_string();
        }

        if let Some(new_dept) = department_id {
            if let Some(dept_id) = new_dept {
                // Verify department exists
                self.storage
                    .departments
                    .get(dept_id)?
                    .ok_or_else(|| CampusError::department_not_found(dept_id.to_string()))?;
            }
            asset.department_id = new_dept;
        }

        if let Some(new_date) = purchase_date {
            asset.purchase_date = new_date;
        }

        if let Some(new_status) = status {
            asset.status = new_status;
        }

        asset.updated_at = chrono::Utc::now();

        // Validate
        asset
            .validate()
            .map_err(|e| CampusError::Validation(e.to_string()))?;

        // Save
        self.storage.assets.upsert(asset.clone())?;
        self.storage.assets.save()?;

        // Build diff summary
        let mut changes = Vec::new();
        if before.name != asset.name {
            changes.push(format!("name: '{}' -> '{}'", before.name, asset.name));
        }
        if before.category != asset.category {
            changes.push(format!(
                "category: '{}' -> '{}'",
                before.category, asset.category
            ));
        }
        if before.serial_number != asset.serial_number {
            changes.push(format!(
                "serial: '{}' -> '{}'",
                before.serial_number, asset.serial_number
            ));
        }
        if before.department_id != asset.department_id {
            changes.push("department changed".to_string());
        }
        if before.purchase_date != asset.purchase_date {
            changes.push(format!(
                "purchase date: {} -> {}",
                before.purchase_date, asset.purchase_date
            ));
        }
        if before.status != asset.status {
            changes.push(format!("status: {} -> {}", before.status, asset.status));
        }

        let diff = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        // Audit log
        self.storage.log_update(
            EntityType::Asset,
            asset.id.to_string(),
            Some(asset.name.clone()),
            &before,
            &asset,
            diff,
        )?;

        Ok(asset)
    }

    /// Change only the status of an asset
    pub fn set_status(&self, id: AssetId, status: AssetStatus) -> CampusResult<Asset> {
        self.update(id, None, None, None, None, None, Some(status))
    }

    /// Delete an asset along with its maintenance history
    pub fn delete(&self, id: AssetId) -> CampusResult<Asset> {
        let asset = self
            .storage
            .assets
            .get(id)?
            .ok_or_else(|| CampusError::asset_not_found(id.to_string()))?;

        // Maintenance records belong to the asset and go with it
        let removed = self.storage.maintenance.delete_by_asset(id)?;
        if removed > 0 {
            self.storage.maintenance.save()?;
        }

        self.storage.assets.delete(id)?;
        self.storage.assets.save()?;

        // Audit log
        self.storage.log_delete(
            EntityType::Asset,
            id.to_string(),
            Some(asset.name.clone()),
            &asset,
        )?;

        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CampusPaths;
    use crate::models::{Department, MaintenanceRecord};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn purchase_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 9, 1).unwrap()
    }

    #[test]
    fn test_create_asset() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let asset = service
            .create(
                "Dell Latitude 5420",
                "Laptop",
                "SN-4411",
                None,
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();

        assert_eq!(asset.name, "Dell Latitude 5420");
        assert_eq!(asset.serial_number, "SN-4411");
        assert_eq!(asset.status, AssetStatus::Active);
        assert_eq!(asset.department_id, None);
    }

    #[test]
    fn test_create_duplicate_serial() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        service
            .create(
                "Projector A",
                "Projector",
                "PRJ-001",
                None,
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();

        // Same serial, different case
        let result = service.create(
            "Projector B",
            "Projector",
            "prj-001",
            None,
            purchase_date(),
            AssetStatus::Active,
        );
        assert!(matches!(result, Err(CampusError::Duplicate { .. })));
    }

    #[test]
    fn test_create_with_unknown_department() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let result = service.create(
            "Microscope",
            "Lab Equipment",
            "MIC-7",
            Some(DepartmentId::new()),
            purchase_date(),
            AssetStatus::Active,
        );
        assert!(matches!(result, Err(CampusError::NotFound { .. })));
    }

    #[test]
    fn test_find_by_serial() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let created = service
            .create(
                "Oscilloscope",
                "Lab Equipment",
                "OSC-2024",
                None,
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();

        let found = service.find("osc-2024").unwrap().unwrap();
        assert_eq!(found.id, created.id);
    }

    #[test]
    fn test_list_filtered_by_search_and_department() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let dept = Department::new("Physics");
        storage.departments.upsert(dept.clone()).unwrap();

        service
            .create(
                "Laser Cutter",
                "Workshop",
                "LC-1",
                Some(dept.id),
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();
        service
            .create(
                "Laser Printer",
                "Office",
                "LP-1",
                None,
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();

        // Search alone matches both
        let matches = service.list_filtered("laser", None).unwrap();
        assert_eq!(matches.len(), 2);

        // Department filter narrows it down
        let matches = service.list_filtered("laser", Some(dept.id)).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Laser Cutter");

        // Empty query matches everything
        let matches = service.list_filtered("", None).unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_list_rows_resolves_department_names() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let dept = Department::new("Chemistry");
        storage.departments.upsert(dept.clone()).unwrap();

        service
            .create(
                "Fume Hood",
                "Lab Equipment",
                "FH-3",
                Some(dept.id),
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();
        service
            .create(
                "Spare Chair",
                "Furniture",
                "CH-9",
                None,
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();

        let rows = service.list_rows("", None).unwrap();
        assert_eq!(rows.len(), 2);

        let hood = rows.iter().find(|r| r.asset.name == "Fume Hood").unwrap();
        assert_eq!(hood.department_name.as_deref(), Some("Chemistry"));

        let chair = rows.iter().find(|r| r.asset.name == "Spare Chair").unwrap();
        assert_eq!(chair.department_name, None);
    }

    #[test]
    fn test_update_asset() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let asset = service
            .create(
                "Whiteboard",
                "Furniture",
                "WB-1",
                None,
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();

        let updated = service
            .update(
                asset.id,
                Some("Smart Whiteboard"),
                None,
                None,
                None,
                None,
                Some(AssetStatus::InRepair),
            )
            .unwrap();

        assert_eq!(updated.name, "Smart Whiteboard");
        assert_eq!(updated.status, AssetStatus::InRepair);
        assert_eq!(updated.category, "Furniture");
    }

    #[test]
    fn test_update_clears_department() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let dept = Department::new("Biology");
        storage.departments.upsert(dept.clone()).unwrap();

        let asset = service
            .create(
                "Incubator",
                "Lab Equipment",
                "INC-5",
                Some(dept.id),
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();

        let updated = service
            .update(asset.id, None, None, None, Some(None), None, None)
            .unwrap();
        assert_eq!(updated.department_id, None);
    }

    #[test]
    fn test_delete_cascades_maintenance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let asset = service
            .create(
                "HVAC Unit",
                "Facilities",
                "HVAC-2",
                None,
                purchase_date(),
                AssetStatus::Active,
            )
            .unwrap();

        let record = MaintenanceRecord::new(
            asset.id,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            "Inspection",
            "R. Alvarez",
        );
        storage.maintenance.upsert(record.clone()).unwrap();
        storage.maintenance.save().unwrap();

        service.delete(asset.id).unwrap();

        assert!(service.get(asset.id).unwrap().is_none());
        assert!(storage.maintenance.get(record.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_asset() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AssetService::new(&storage);

        let result = service.delete(AssetId::new());
        assert!(matches!(result, Err(CampusError::NotFound { .. })));
    }
}
