//! Maintenance service
//!
//! Business logic for recording and reviewing maintenance activity
//! against assets.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{CampusError, CampusResult};
use crate::models::{AssetId, MaintenanceId, MaintenanceRecord};
use crate::storage::Storage;

/// Service for maintenance history
pub struct MaintenanceService<'a> {
    storage: &'a Storage,
}

/// A maintenance record with its asset name resolved for display
#[derive(Debug, Clone)]
pub struct MaintenanceRow {
    pub record: MaintenanceRecord,
    /// None when the referenced asset no longer exists
    pub asset_name: Option<String>,
}

impl<'a> MaintenanceService<'a> {
    /// Create a new maintenance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record maintenance activity for an asset
    pub fn create(
        &self,
        asset_id: AssetId,
        maintenance_date: NaiveDate,
        kind: &str,
        technician: &str,
        remarks: &str,
    ) -> CampusResult<MaintenanceRecord> {
        // The record is meaningless without its asset
        let asset = self
            .storage
            .assets
            .get(asset_id)?
            .ok_or_else(|| CampusError::asset_not_found(asset_id.to_string()))?;

        let record = MaintenanceRecord::new(
            asset_id,
            maintenance_date,
            kind.trim(),
            technician.trim(),
        )
        .with_remarks(remarks.trim());

        // Validate
        record
            .validate()
            .map_err(|e| CampusError::Validation(e.to_string()))?;

        // Save to storage
        self.storage.maintenance.upsert(record.clone())?;
        self.storage.maintenance.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Maintenance,
            record.id.to_string(),
            Some(format!("{} for {}", record.kind, asset.name)),
            &record,
        )?;

        Ok(record)
    }

    /// Get a maintenance record by ID
    pub fn get(&self, id: MaintenanceId) -> CampusResult<Option<MaintenanceRecord>> {
        self.storage.maintenance.get(id)
    }

    /// Get all maintenance records, most recent first
    pub fn list(&self) -> CampusResult<Vec<MaintenanceRecord>> {
        self.storage.maintenance.get_all()
    }

    /// Get the maintenance history for one asset, most recent first
    pub fn list_for_asset(&self, asset_id: AssetId) -> CampusResult<Vec<MaintenanceRecord>> {
        self.storage.maintenance.get_by_asset(asset_id)
    }

    /// Get all maintenance records with asset names resolved
    pub fn list_rows(&self) -> CampusResult<Vec<MaintenanceRow>> {
        let records = self.list()?;
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            let asset_name = self.storage.assets.get(record.asset_id)?.map(|a| a.name);
            rows.push(MaintenanceRow { record, asset_name });
        }

        Ok(rows)
    }

    /// Delete a maintenance record
    pub fn delete(&self, id: MaintenanceId) -> CampusResult<MaintenanceRecord> {
        let record = self
            .storage
            .maintenance
            .get(id)?
            .ok_or_else(|| CampusError::maintenance_not_found(id.to_string()))?;

        self.storage.maintenance.delete(id)?;
        self.storage.maintenance.save()?;

        // Audit log
        self.storage.log_delete(
            EntityType::Maintenance,
            id.to_string(),
            Some(record.kind.clone()),
            &record,
        )?;

        Ok(record)
    }
}
