//! Configuration model loaded from `config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{Display, EnumString};

/// Placeholder avatar given to freshly registered users.
pub const DEFAULT_PLACEHOLDER_AVATAR: &str = "https://placehold.co/100x100.png";

/// What an email-only login does when no catalog entry has that email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LoginMissPolicy {
    /// Leave the session unchanged.
    #[default]
    Ignore,
    /// Log in as the first user of the seed catalog.
    DefaultUser,
    /// Log in as the first user of the live catalog.
    FirstCatalogEntry,
}

/// Where session slots are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// Session behaviour settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub login_miss: LoginMissPolicy,
    pub placeholder_avatar_url: String,
    /// Start from the built-in catalog when a slot is empty.
    pub seed_catalog: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_miss: LoginMissPolicy::default(),
            placeholder_avatar_url: DEFAULT_PLACEHOLDER_AVATAR.to_string(),
            seed_catalog: true,
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Overrides the platform state directory for the file backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}
