//! Path management for InvestPro
//!
//! ## Path Resolution Order
//!
//! 1. `INVESTPRO_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/investpro` on Linux, `%APPDATA%\InvestPro\investpro\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::InvestError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "INVESTPRO_DATA_DIR";

/// Manages all paths used by InvestPro
#[derive(Debug, Clone)]
pub struct InvestPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl InvestPaths {
    /// Create a new InvestPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, InvestError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create InvestPaths with a custom base directory (useful for testing)
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

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("investpro.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), InvestError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| InvestError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, InvestError> {
    ProjectDirs::from("com", "InvestPro", "investpro")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| InvestError::Config("Could not determine a home directory".into()))
}
