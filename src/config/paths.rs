//! Path management for Tandem
//!
//! Resolves where settings and saved snapshots live on each platform.
//!
//! ## Path Resolution Order
//!
//! 1. `TANDEM_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory via `directories` (e.g.
//!    `~/.config/tandem` on Linux, `%APPDATA%\tandem` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Manages all paths used by Tandem
#[derive(Debug, Clone)]
pub struct TandemPaths {
    /// Base directory for all Tandem data
    base_dir: PathBuf,
}

impl TandemPaths {
    /// Create a new TandemPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var("TANDEM_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "tandem").ok_or_else(|| {
                BudgetError::Config("Could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create TandemPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory for saved snapshot files
    pub fn snapshots_dir(&self) -> PathBuf {
        self.base_dir.join("snapshots")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.snapshots_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create snapshots directory: {}", e)))?;

        Ok(())
    }
}
