//! Unified path management for maeum configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/maeum/             # Config directory
//! ├── config.toml              # Client configuration (optional)
//! └── logs/                    # Application logs
//!     └── maeum.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

use maeum_core::{MaeumError, Result};

const APP_DIR: &str = "maeum";

/// Unified path management for maeum.
pub struct MaeumPaths;

impl MaeumPaths {
    /// Returns the maeum configuration directory (e.g., `~/.config/maeum/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| MaeumError::config("Cannot find home directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the log directory, creating it if needed.
    pub fn ensure_log_dir() -> Result<PathBuf> {
        let dir = Self::config_dir()?.join("logs");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
