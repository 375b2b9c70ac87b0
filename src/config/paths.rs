//! Path management for reimburse-cli
//!
//! Provides XDG-compliant path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `REIMBURSE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/reimburse-cli` or `~/.config/reimburse-cli`
//! 3. Windows: `%APPDATA%\reimburse-cli`

use std::path::PathBuf;

use crate::error::ReimburseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "REIMBURSE_CLI_DATA_DIR";

/// Manages all paths used by reimburse-cli
#[derive(Debug, Clone)]
pub struct ReimbursePaths {
    base_dir: PathBuf,
}

impl ReimbursePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, ReimburseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths under a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/reimburse-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ReimburseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReimburseError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReimburseError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                ReimburseError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("reimburse-cli"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReimburseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ReimburseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("reimburse-cli"))
}
