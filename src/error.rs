//! Custom error types for campus-assets-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for campus-assets operations
#[derive(Error, Debug)]
pub enum CampusError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CampusError {
    /// Create a "not found" error for departments
    pub fn department_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Department",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for assets
    pub fn asset_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Asset",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for maintenance records
    pub fn maintenance_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Maintenance record",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CampusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CampusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for campus-assets operations
pub type CampusResult<T> = Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CampusError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CampusError::department_not_found("Physics");
        assert_eq!(err.to_string(), "Department not found: Physics");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_error() {
        let err = CampusError::Duplicate {
            entity_type: "Asset",
            identifier: "SN-1042".into(),
        };
        assert_eq!(err.to_string(), "Asset already exists: SN-1042");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let campus_err: CampusError = io_err.into();
        assert!(matches!(campus_err, CampusError::Io(_)));
    }
}
