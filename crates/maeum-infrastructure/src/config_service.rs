//! Configuration service implementation.
//!
//! Loads the root configuration from `~/.config/maeum/config.toml` (or an
//! explicit path). A missing file is not an error; it yields the defaults.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use maeum_core::config::RootConfig;
use maeum_core::{MaeumError, Result};

use crate::paths::MaeumPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Uses the default location under the user's config directory.
    pub fn new() -> Self {
        Self {
            path: MaeumPaths::config_file().ok(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Uses an explicit configuration file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A file that exists but does not parse is reported as an error.
    pub fn get_config(&self) -> Result<RootConfig> {
        if let Some(cached) = self
            .config
            .read()
            .map_err(|e| MaeumError::internal(format!("config cache poisoned: {}", e)))?
            .as_ref()
        {
            return Ok(cached.clone());
        }

        let loaded = match &self.path {
            Some(path) => Self::load_config(path)?,
            None => RootConfig::default(),
        };

        *self
            .config
            .write()
            .map_err(|e| MaeumError::internal(format!("config cache poisoned: {}", e)))? =
            Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: RootConfig = toml::from_str(&content).map_err(|e| {
            MaeumError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
