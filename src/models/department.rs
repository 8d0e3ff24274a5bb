//! Department model
//!
//! Represents a university department that assets can be assigned to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DepartmentId;

/// A university department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier
    pub id: DepartmentId,

    /// Department name (e.g., "Computer Science")
    pub name: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: String,

    /// When the department was created
    pub created_at: DateTime<Utc>,

    /// When the department was last modified
    pub updated_at: DateTime<Utc>,
}

impl Department {
    /// Create a new department
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DepartmentId::new(),
            name: name.into(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new department with a description
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut department = Self::new(name);
        department.description = description.into();
        department
    }

    /// Rename this department
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Replace the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.updated_at = Utc::now();
    }

    /// Validate the department
    pub fn validate(&self) -> Result<(), DepartmentValidationError> {
        if self.name.trim().is_empty() {
            return Err(DepartmentValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(DepartmentValidationError::NameTooLong(self.name.len()));
        }

        if self.description.len() > 500 {
            return Err(DepartmentValidationError::DescriptionTooLong(
                self.description.len(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for departments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentValidationError {
    EmptyName,
    NameTooLong(usize),
    DescriptionTooLong(usize),
}

impl fmt::Display for DepartmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Department name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Department name too long ({} chars, max 100)", len)
            }
            Self::DescriptionTooLong(len) => {
                write!(f, "Department description too long ({} chars, max 500)", len)
            }
        }
    }
}

impl std::error::Error for DepartmentValidationError {}
