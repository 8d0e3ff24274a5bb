//! JSON Export functionality
//!
//! Exports the complete database to JSON format with schema versioning.

use crate::error::CampusResult;
use crate::models::{Asset, Department, MaintenanceRecord};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All departments
    pub departments: Vec<Department>,

    /// All assets
    pub assets: Vec<Asset>,

    /// All maintenance records
    pub maintenance: Vec<MaintenanceRecord>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of departments
    pub department_count: usize,

    /// Total number of assets
    pub asset_count: usize,

    /// Total number of maintenance records
    pub maintenance_count: usize,

    /// Earliest asset purchase date
    pub earliest_purchase: Option<String>,

    /// Most recent maintenance date
    pub latest_maintenance: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> CampusResult<Self> {
        let departments = storage.departments.get_all()?;
        let assets = storage.assets.get_all()?;
        let maintenance = storage.maintenance.get_all()?;

        // Calculate metadata
        let earliest_purchase = assets
            .iter()
            .map(|a| a.purchase_date)
            .min()
            .map(|d| d.to_string());

        let latest_maintenance = maintenance
            .iter()
            .map(|m| m.maintenance_date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            department_count: departments.len(),
            asset_count: assets.len(),
            maintenance_count: maintenance.len(),
            earliest_purchase,
            latest_maintenance,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            departments,
            assets,
            maintenance,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        // Check schema version
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        // Check referential integrity
        let department_ids: std::collections::HashSet<_> =
            self.departments.iter().map(|d| d.id).collect();
        let asset_ids: std::collections::HashSet<_> = self.assets.iter().map(|a| a.id).collect();

        // Validate assets reference valid departments
        for asset in &self.assets {
            if let Some(dept_id) = asset.department_id {
                if !department_ids.contains(&dept_id) {
                    return Err(format!(
                        "Asset {} references unknown department {}",
                        asset.id, dept_id
                    ));
                }
            }
        }

        // Validate maintenance records reference valid assets
        for record in &self.maintenance {
            if !asset_ids.contains(&record.asset_id) {
                return Err(format!(
                    "Maintenance record {} references unknown asset {}",
                    record.id, record.asset_id
                ));
            }
        }

        Ok(())
    }
}

/// Export the full database to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> CampusResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| crate::error::CampusError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> CampusResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| crate::error::CampusError::Import(e.to_string()))?;

    // Validate the import
    export
        .validate()
        .map_err(crate::error::CampusError::Import)?;

    Ok(export)
}
