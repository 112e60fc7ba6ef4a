//! User settings for the Tandem binary
//!
//! Defaults the binary applies when a snapshot or command line does not
//! specify them: period type, carryover mode, methodology, and how money
//! is rendered. The engine itself never reads settings; everything it
//! needs arrives in its input.

use serde::{Deserialize, Serialize};

use super::paths::TandemPaths;
use crate::engine::{CarryoverMode, MethodologyKind};
use crate::error::BudgetError;
use crate::models::PeriodType;

/// User settings for Tandem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default period type when a command does not pass one
    #[serde(default)]
    pub period_type: PeriodType,

    /// Default carryover behavior
    #[serde(default)]
    pub carryover_mode: CarryoverMode,

    /// Default methodology for display sections
    #[serde(default = "default_methodology")]
    pub methodology: MethodologyKind,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_methodology() -> MethodologyKind {
    MethodologyKind::ZeroBased
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            period_type: PeriodType::default(),
            carryover_mode: CarryoverMode::default(),
            methodology: default_methodology(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TandemPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TandemPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

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
        assert_eq!(settings.period_type, PeriodType::Monthly);
        assert_eq!(settings.carryover_mode, CarryoverMode::Rollover);
        assert_eq!(settings.methodology, MethodologyKind::ZeroBased);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TandemPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.period_type = PeriodType::Fortnightly;
        settings.methodology = MethodologyKind::FiftyThirtyTwenty;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.period_type, PeriodType::Fortnightly);
        assert_eq!(loaded.methodology, MethodologyKind::FiftyThirtyTwenty);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TandemPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.period_type, PeriodType::Monthly);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.period_type, deserialized.period_type);
        assert_eq!(settings.methodology, deserialized.methodology);
    }
}
