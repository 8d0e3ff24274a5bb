//! Asset repository for JSON storage
//!
//! Manages loading and saving assets to assets.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CampusError;
use crate::models::{Asset, AssetId, DepartmentId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable asset data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AssetData {
    assets: Vec<Asset>,
}

/// Repository for asset persistence
pub struct AssetRepository {
    path: PathBuf,
    data: RwLock<HashMap<AssetId, Asset>>,
}

impl AssetRepository {
    /// Create a new asset repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load assets from disk
    pub fn load(&self) -> Result<(), CampusError> {
        let file_data: AssetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for asset in file_data.assets {
            data.insert(asset.id, asset);
        }

        Ok(())
    }

    /// Save assets to disk
    pub fn save(&self) -> Result<(), CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = AssetData {
            assets: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an asset by ID
    pub fn get(&self, id: AssetId) -> Result<Option<Asset>, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all assets, sorted by name
    pub fn get_all(&self) -> Result<Vec<Asset>, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut assets: Vec<_> = data.values().cloned().collect();
        assets.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(assets)
    }

    /// Get all assets assigned to a department
    pub fn get_by_department(&self, department_id: DepartmentId) -> Result<Vec<Asset>, CampusError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|a| a.department_id == Some(department_id))
            .collect())
    }

    /// Get an asset by serial number (case-insensitive)
    pub fn get_by_serial(&self, serial_number: &str) -> Result<Option<Asset>, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let serial_lower = serial_number.to_lowercase();
        Ok(data
            .values()
            .find(|a| a.serial_number.to_lowercase() == serial_lower)
            .cloned())
    }

    /// Insert or update an asset
    pub fn upsert(&self, asset: Asset) -> Result<(), CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(asset.id, asset);
        Ok(())
    }

    /// Replace the entire collection, used by full-database restore
    pub fn replace_all(&self, assets: Vec<Asset>) -> Result<(), CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for asset in assets {
            data.insert(asset.id, asset);
        }

        Ok(())
    }

    /// Delete an asset
    pub fn delete(&self, id: AssetId) -> Result<bool, CampusError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if an asset exists
    pub fn exists(&self, id: AssetId) -> Result<bool, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Check if a serial number is already taken
    pub fn serial_exists(
        &self,
        serial_number: &str,
        exclude_id: Option<AssetId>,
    ) -> Result<bool, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let serial_lower = serial_number.to_lowercase();
        Ok(data
            .values()
            .any(|a| a.serial_number.to_lowercase() == serial_lower && Some(a.id) != exclude_id))
    }

    /// Count assets
    pub fn count(&self) -> Result<usize, CampusError> {
        let data = self
            .data
            .read()
            .map_err(|e| CampusError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
