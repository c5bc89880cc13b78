//! User settings for dfmis-periods
//!
//! Persists the defaults the CLI applies when a flag is omitted: granularity,
//! output format, allocation method and currency symbol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::DfmisPaths;
use crate::error::PeriodError;
use crate::models::{AllocationMethod, Granularity};

/// How schedules are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned terminal table
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(PeriodError::Config(format!(
                "Unknown output format '{}': expected table, csv, json or yaml",
                s
            ))),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Granularity used when none is given
    #[serde(default)]
    pub default_granularity: Granularity,

    /// Output format used when none is given
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Allocation method used when none is given
    #[serde(default)]
    pub allocation_method: AllocationMethod,

    /// Currency symbol shown in tables
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_granularity: Granularity::default(),
            output_format: OutputFormat::default(),
            allocation_method: AllocationMethod::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &DfmisPaths) -> Result<Self, PeriodError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PeriodError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PeriodError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DfmisPaths) -> Result<(), PeriodError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PeriodError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PeriodError::Io(format!("Failed to write settings file: {}", e)))?;

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
        assert_eq!(settings.default_granularity, Granularity::Quarterly);
        assert_eq!(settings.output_format, OutputFormat::Table);
        assert_eq!(settings.allocation_method, AllocationMethod::Even);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DfmisPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_granularity = Granularity::Monthly;
        settings.output_format = OutputFormat::Json;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_granularity, Granularity::Monthly);
        assert_eq!(loaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"default_granularity":"annual"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.default_granularity, Granularity::Annual);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DfmisPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PeriodError::Config(_)));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
