//! Path management for campus-assets-cli
//!
//! Provides XDG-compliant path resolution for configuration, data, and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `CAMPUS_ASSETS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/campus-assets` or `~/.config/campus-assets`
//! 3. Windows: `%APPDATA%\campus-assets`

use std::path::PathBuf;

use crate::error::CampusError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "CAMPUS_ASSETS_DATA_DIR";

/// Manages all paths used by campus-assets-cli
#[derive(Debug, Clone)]
pub struct CampusPaths {
    /// Base directory for all campus-assets data
    base_dir: PathBuf,
}

impl CampusPaths {
    /// Create a new CampusPaths instance
    ///
    /// Path resolution:
    /// 1. `CAMPUS_ASSETS_DATA_DIR` env var (explicit override; a set-but-blank
    ///    value is rejected rather than silently falling through)
    /// 2. Unix: `$XDG_CONFIG_HOME/campus-assets` or `~/.config/campus-assets`
    /// 3. Windows: `%APPDATA%\campus-assets`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or if the
    /// override variable is set to an empty/whitespace-only value.
    pub fn new() -> Result<Self, CampusError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) => {
                let trimmed = custom.trim();
                if trimmed.is_empty() {
                    return Err(CampusError::Config(format!(
                        "Environment variable {} is missing or empty",
                        DATA_DIR_ENV
                    )));
                }
                PathBuf::from(trimmed)
            }
            Err(_) => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CampusPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/campus-assets/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/campus-assets/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the export directory (~/.config/campus-assets/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to departments.json
    pub fn departments_file(&self) -> PathBuf {
        self.data_dir().join("departments.json")
    }

    /// Get the path to assets.json
    pub fn assets_file(&self) -> PathBuf {
        self.data_dir().join("assets.json")
    }

    /// Get the path to maintenance.json
    pub fn maintenance_file(&self) -> PathBuf {
        self.data_dir().join("maintenance.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/campus-assets/)
    /// - Data directory (~/.config/campus-assets/data/)
    /// - Export directory (~/.config/campus-assets/exports/)
    pub fn ensure_directories(&self) -> Result<(), CampusError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CampusError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CampusError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| CampusError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if campus-assets has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CampusError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| CampusError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("campus-assets"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CampusError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CampusError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("campus-assets"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    // Single test for all env var behavior; parallel tests must not fight
    // over the same process-global variable
    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = CampusPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        // Surrounding whitespace is trimmed
        env::set_var(DATA_DIR_ENV, format!("  {}  ", custom_path));
        let paths = CampusPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        // A set-but-blank override is an error, not a fallthrough
        env::set_var(DATA_DIR_ENV, "   ");
        let result = CampusPaths::new();
        assert!(result.is_err());
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("missing or empty"));

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.export_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.assets_file(),
            temp_dir.path().join("data").join("assets.json")
        );
        assert_eq!(
            paths.maintenance_file(),
            temp_dir.path().join("data").join("maintenance.json")
        );
    }
}
