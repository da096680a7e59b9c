//! Path resolution for skillswap configuration and session state.
//!
//! ```text
//! ~/.config/skillswap/          # Config directory
//! └── config.toml               # Application configuration
//!
//! ~/.local/state/skillswap/     # State directory (data dir where the
//! └── session/                  # platform has no state dir)
//!     ├── skill-swap-user.json
//!     ├── skill-swap-users.json
//!     └── skill-swap-swaps.json
//! ```

use std::path::PathBuf;

use skillswap_core::error::{Result, SkillSwapError};

const APP_DIR: &str = "skillswap";

/// Platform path lookup, optionally rooted at an override directory.
///
/// With a base directory every path lives below it, which is what tests and
/// `--state-dir` use.
#[derive(Debug, Clone, Default)]
pub struct SkillSwapPaths {
    base: Option<PathBuf>,
}

impl SkillSwapPaths {
    /// Creates a path resolver; `None` uses the platform directories.
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// Returns the configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SkillSwapError::config("Cannot find config directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the session slot files.
    pub fn session_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.join("session"));
        }
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|dir| dir.join(APP_DIR).join("session"))
            .ok_or_else(|| SkillSwapError::config("Cannot find state directory"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override() {
        let paths = SkillSwapPaths::new(Some(PathBuf::from("/tmp/skillswap-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/skillswap-test/config.toml")
        );
        assert_eq!(
            paths.session_dir().unwrap(),
            PathBuf::from("/tmp/skillswap-test/session")
        );
    }

    #[test]
    fn test_platform_paths_end_with_app_dir() {
        let paths = SkillSwapPaths::default();
        if let Ok(dir) = paths.config_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
        if let Ok(dir) = paths.session_dir() {
            assert!(dir.ends_with("skillswap/session"));
        }
    }
}
