//! Path management for the allowance tracker
//!
//! ## Path Resolution Order
//!
//! 1. `ALLOWANCE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/allowance-tracker` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AllowanceError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ALLOWANCE_TRACKER_DATA_DIR";

/// Manages all paths used by the allowance tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AllowanceError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
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

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted session snapshot
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), AllowanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AllowanceError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| AllowanceError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, AllowanceError> {
    ProjectDirs::from("", "", "allowance-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AllowanceError::Config("Could not determine a home directory".into()))
}
