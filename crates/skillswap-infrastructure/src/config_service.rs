//! Configuration service.
//!
//! Loads `AppConfig` from `config.toml` and caches it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use skillswap_core::config::AppConfig;
use skillswap_core::error::{Result, SkillSwapError};

use crate::paths::SkillSwapPaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the defaults; a malformed file is an error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform `config.toml`.
    pub fn new(paths: &SkillSwapPaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    /// Creates a service reading `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the file this service reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading it on first access.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| SkillSwapError::internal(format!("Lock poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load(&self.path)?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|e| SkillSwapError::internal(format!("Lock poisoned: {}", e)))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load(path: &Path) -> Result<AppConfig> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let config: AppConfig = toml::from_str(&content).map_err(|e| {
                    SkillSwapError::config(format!("Failed to parse {}: {}", path.display(), e))
                })?;
                tracing::debug!(path = %path.display(), "Configuration loaded");
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(AppConfig::default())
            }
            Err(e) => Err(SkillSwapError::io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
