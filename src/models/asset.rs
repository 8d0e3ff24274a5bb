//! Asset model
//!
//! Represents physical assets (equipment, furniture, vehicles, etc.) tracked
//! by the university.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AssetId, DepartmentId};

/// Tracking status of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    /// In service at its assigned location
    Active,
    /// Cannot be located
    Missing,
    /// Moved to another institution or disposed of
    Transferred,
    /// Out of service for repair
    InRepair,
}

impl AssetStatus {
    /// All statuses in display order
    pub const ALL: [AssetStatus; 4] = [
        Self::Active,
        Self::Missing,
        Self::Transferred,
        Self::InRepair,
    ];

    /// Statuses other than Active need attention on reports
    pub fn is_flagged(&self) -> bool {
        !matches!(self, Self::Active)
    }

    /// The storage name of the status, as written to JSON and CSV
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Missing => "missing",
            Self::Transferred => "transferred",
            Self::InRepair => "in_repair",
        }
    }

    /// Parse asset status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "active" => Some(Self::Active),
            "missing" => Some(Self::Missing),
            "transferred" => Some(Self::Transferred),
            "in_repair" | "inrepair" | "repair" => Some(Self::InRepair),
            _ => None,
        }
    }
}

impl Default for AssetStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Missing => write!(f, "Missing"),
            Self::Transferred => write!(f, "Transferred"),
            Self::InRepair => write!(f, "In Repair"),
        }
    }
}

/// A physical asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier
    pub id: AssetId,

    /// Asset name (e.g., "Dell Latitude 5540")
    pub name: String,

    /// Category (e.g., "Laptop", "Projector", "Vehicle")
    pub category: String,

    /// Manufacturer serial number, unique across the inventory
    pub serial_number: String,

    /// Owning department; None means unassigned
    pub department_id: Option<DepartmentId>,

    /// Date of purchase
    pub purchase_date: NaiveDate,

    /// Current tracking status
    #[serde(default)]
    pub status: AssetStatus,

    /// When the asset record was created
    pub created_at: DateTime<Utc>,

    /// When the asset record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    /// Create a new asset with default status
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        serial_number: impl Into<String>,
        purchase_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AssetId::new(),
            name: name.into(),
            category: category.into(),
            serial_number: serial_number.into(),
            department_id: None,
            purchase_date,
            status: AssetStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Assign this asset to a department (None detaches it)
    pub fn assign_department(&mut self, department_id: Option<DepartmentId>) {
        self.department_id = department_id;
        self.updated_at = Utc::now();
    }

    /// Change the tracking status
    pub fn set_status(&mut self, status: AssetStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match on name or serial number
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.serial_number.to_lowercase().contains(&query)
    }

    /// Validate the asset
    pub fn validate(&self) -> Result<(), AssetValidationError> {
        if self.name.trim().is_empty() {
            return Err(AssetValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AssetValidationError::NameTooLong(self.name.len()));
        }

        if self.category.trim().is_empty() {
            return Err(AssetValidationError::EmptyCategory);
        }

        if self.serial_number.trim().is_empty() {
            return Err(AssetValidationError::EmptySerialNumber);
        }

        Ok(())
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.serial_number)
    }
}

/// Validation errors for assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyCategory,
    EmptySerialNumber,
}

impl fmt::Display for AssetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Asset name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Asset name too long ({} chars, max 100)", len)
            }
            Self::EmptyCategory => write!(f, "Asset category cannot be empty"),
            Self::EmptySerialNumber => write!(f, "Serial number cannot be empty"),
        }
    }
}

impl std::error::Error for AssetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    #[test]
    fn test_new_asset() {
        let asset = Asset::new("Projector X200", "Projector", "SN-4471", sample_date());
        assert_eq!(asset.name, "Projector X200");
        assert_eq!(asset.status, AssetStatus::Active);
        assert!(asset.department_id.is_none());
    }

    #[test]
    fn test_assign_department() {
        let mut asset = Asset::new("Lab Bench", "Furniture", "SN-9001", sample_date());
        let department_id = DepartmentId::new();

        asset.assign_department(Some(department_id));
        assert_eq!(asset.department_id, Some(department_id));

        asset.assign_department(None);
        assert!(asset.department_id.is_none());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(AssetStatus::parse("active"), Some(AssetStatus::Active));
        assert_eq!(AssetStatus::parse("MISSING"), Some(AssetStatus::Missing));
        assert_eq!(AssetStatus::parse("in_repair"), Some(AssetStatus::InRepair));
        assert_eq!(AssetStatus::parse("In Repair"), Some(AssetStatus::InRepair));
        assert_eq!(AssetStatus::parse("invalid"), None);
    }

    #[test]
    fn test_status_serde_format() {
        let json = serde_json::to_string(&AssetStatus::InRepair).unwrap();
        assert_eq!(json, "\"in_repair\"");
        assert_eq!(AssetStatus::InRepair.as_str(), "in_repair");

        let parsed: AssetStatus = serde_json::from_str("\"transferred\"").unwrap();
        assert_eq!(parsed, AssetStatus::Transferred);
    }

    #[test]
    fn test_is_flagged() {
        assert!(!AssetStatus::Active.is_flagged());
        assert!(AssetStatus::Missing.is_flagged());
        assert!(AssetStatus::Transferred.is_flagged());
        assert!(AssetStatus::InRepair.is_flagged());
    }

    #[test]
    fn test_matches_search() {
        let asset = Asset::new("Dell Latitude", "Laptop", "SN-1042X", sample_date());

        assert!(asset.matches_search(""));
        assert!(asset.matches_search("dell"));
        assert!(asset.matches_search("LATITUDE"));
        assert!(asset.matches_search("1042x"));
        assert!(!asset.matches_search("macbook"));
        assert!(!asset.matches_search("laptop")); // category is not searched
    }

    #[test]
    fn test_validation() {
        let mut asset = Asset::new("Valid", "Category", "SN-1", sample_date());
        assert!(asset.validate().is_ok());

        asset.name = "  ".to_string();
        assert_eq!(asset.validate(), Err(AssetValidationError::EmptyName));

        asset.name = "Valid".to_string();
        asset.serial_number = String::new();
        assert_eq!(
            asset.validate(),
            Err(AssetValidationError::EmptySerialNumber)
        );
    }

    #[test]
    fn test_serialization() {
        let mut asset = Asset::new("Microscope", "Lab Equipment", "SN-771", sample_date());
        asset.status = AssetStatus::InRepair;

        let json = serde_json::to_string(&asset).unwrap();
        let deserialized: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset.id, deserialized.id);
        assert_eq!(deserialized.status, AssetStatus::InRepair);
        assert_eq!(deserialized.purchase_date, sample_date());
    }
}
