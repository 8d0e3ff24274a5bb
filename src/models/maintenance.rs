//! Maintenance record model
//!
//! Represents a single maintenance event (repair, inspection, cleaning, ...)
//! performed on an asset.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AssetId, MaintenanceId};

/// A maintenance event for an asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Unique identifier
    pub id: MaintenanceId,

    /// Asset this record belongs to
    pub asset_id: AssetId,

    /// When the maintenance was performed
    pub maintenance_date: NaiveDate,

    /// Kind of maintenance (e.g., "Repair", "Inspection", "Cleaning")
    #[serde(rename = "type")]
    pub kind: String,

    /// Who performed the maintenance
    pub technician: String,

    /// Optional free-text remarks
    #[serde(default)]
    pub remarks: String,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRecord {
    /// Create a new maintenance record
    pub fn new(
        asset_id: AssetId,
        maintenance_date: NaiveDate,
        kind: impl Into<String>,
        technician: impl Into<String>,
    ) -> Self {
        Self {
            id: MaintenanceId::new(),
            asset_id,
            maintenance_date,
            kind: kind.into(),
            technician: technician.into(),
            remarks: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach remarks to this record
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), MaintenanceValidationError> {
        if self.kind.trim().is_empty() {
            return Err(MaintenanceValidationError::EmptyKind);
        }

        if self.technician.trim().is_empty() {
            return Err(MaintenanceValidationError::EmptyTechnician);
        }

        if self.remarks.len() > 500 {
            return Err(MaintenanceValidationError::RemarksTooLong(
                self.remarks.len(),
            ));
        }

        Ok(())
    }
}

/// Validation errors for maintenance records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaintenanceValidationError {
    EmptyKind,
    EmptyTechnician,
    RemarksTooLong(usize),
}

impl fmt::Display for MaintenanceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKind => write!(f, "Maintenance type cannot be empty"),
            Self::EmptyTechnician => write!(f, "Technician cannot be empty"),
            Self::RemarksTooLong(len) => {
                write!(f, "Remarks too long ({} chars, max 500)", len)
            }
        }
    }
}

impl std::error::Error for MaintenanceValidationError {}
