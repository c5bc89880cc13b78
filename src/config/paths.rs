//! Path management for dfmis-periods
//!
//! ## Path Resolution Order
//!
//! 1. `DFMIS_PERIODS_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/dfmis-periods` or `~/.config/dfmis-periods`
//! 3. Windows: `%APPDATA%\dfmis-periods`

use std::path::PathBuf;

use crate::error::PeriodError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "DFMIS_PERIODS_DIR";

const APP_DIR_NAME: &str = "dfmis-periods";

/// Manages all paths used by dfmis-periods
#[derive(Debug, Clone)]
pub struct DfmisPaths {
    base_dir: PathBuf,
}

impl DfmisPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home/config directory
    /// can be determined.
    pub fn new() -> Result<Self, PeriodError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PeriodError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PeriodError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PeriodError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                PeriodError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PeriodError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PeriodError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
