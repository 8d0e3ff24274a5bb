//! Maintenance record repository for JSON storage
//!
//! Manages loading and saving maintenance records to maintenance.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CampusError;
use crate::models::{AssetId, MaintenanceId, MaintenanceRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable maintenance data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct MaintenanceData {
    records: Vec<MaintenanceRecord>,
}

/// Repository for maintenance record persistence
pub struct MaintenanceRepository {
    path: PathBuf,
    data: RwLock<HashMap<MaintenanceId, MaintenanceRecord>>,
}

impl MaintenanceRepository {
    /// Create a new maintenance repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), CampusError> {
        let file_data: MaintenanceData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.records {
            data.insert(record.id, record);
        }

        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = MaintenanceData {
            records: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a record by ID
    pub fn get(&self, id: MaintenanceId) -> Result<Option<MaintenanceRecord>, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all records, most recent maintenance first
    pub fn get_all(&self) -> Result<Vec<MaintenanceRecord>, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| {
            b.maintenance_date
                .cmp(&a.maintenance_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(records)
    }

    /// Get all records for one asset, most recent first
    pub fn get_by_asset(&self, asset_id: AssetId) -> Result<Vec<MaintenanceRecord>, CampusError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|r| r.asset_id == asset_id).collect())
    }

    /// Insert or update a record
    pub fn upsert(&self, record: MaintenanceRecord) -> Result<(), CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(record.id, record);
        Ok(())
    }

    /// Replace the entire collection, used by full-database restore
    pub fn replace_all(&self, records: Vec<MaintenanceRecord>) -> Result<(), CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in records {
            data.insert(record.id, record);
        }

        Ok(())
    }

    /// Delete a record
    pub fn delete(&self, id: MaintenanceId) -> Result<bool, CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Delete every record belonging to an asset, returning how many were removed
    pub fn delete_by_asset(&self, asset_id: AssetId) -> Result<usize, CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let doomed: Vec<MaintenanceId> = data
            .values()
            .filter(|r| r.asset_id == asset_id)
            .map(|r| r.id)
            .collect();

        for id in &doomed {
            data.remove(id);
        }

        Ok(doomed.len())
    }

    /// Check if a record exists
    pub fn exists(&self, id: MaintenanceId) -> Result<bool, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Count records
    pub fn count(&self) -> Result<usize, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
