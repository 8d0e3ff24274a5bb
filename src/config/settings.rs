//! User settings for campus-assets-cli
//!
//! Manages user preferences including the displayed institution name,
//! date formatting, and notification timing.

use serde::{Deserialize, Serialize};

use super::paths::CampusPaths;
use crate::error::CampusError;

/// User settings for campus-assets-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Institution name shown as the sidebar heading
    #[serde(default = "default_university_name")]
    pub university_name: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How long notification toasts stay on screen, in seconds
    #[serde(default = "default_notification_seconds")]
    pub notification_seconds: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_university_name() -> String {
    "University Asset Management".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_notification_seconds() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            university_name: default_university_name(),
            date_format: default_date_format(),
            notification_seconds: default_notification_seconds(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CampusPaths) -> Result<Self, CampusError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CampusError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| CampusError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CampusPaths) -> Result<(), CampusError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CampusError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CampusError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.university_name, "University Asset Management");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.notification_seconds, 5);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.university_name = "Eastfield College".to_string();
        settings.date_format = "%d/%m/%Y".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.university_name, "Eastfield College");
        assert_eq!(loaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.schema_version, 1);
        assert_eq!(loaded.university_name, "University Asset Management");
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(
            paths.settings_file(),
            r#"{"university_name": "Northgate Tech"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.university_name, "Northgate Tech");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }
}
