//! File-backed session store.
//!
//! Each slot lives in `{dir}/{slot-key}.json`. Writes go to a temporary
//! sibling file that is renamed over the target, so a reader never sees a
//! half-written slot.

use std::fs::{self, File};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use skillswap_core::error::{Result, SkillSwapError};
use skillswap_core::session::{SessionSlot, SessionStore};

/// Session store keeping one JSON file per slot in a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path of `slot`.
    pub fn slot_path(&self, slot: SessionSlot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }

    fn temp_path(&self, slot: SessionSlot) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", slot.key()))
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self, slot: SessionSlot) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SkillSwapError::io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write(&self, slot: SessionSlot, text: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            SkillSwapError::io(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let tmp_path = self.temp_path(slot);
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(text.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, self.slot_path(slot))?;
        Ok(())
    }

    fn clear(&self, slot: SessionSlot) -> Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_slot_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("state"));
        assert_eq!(store.read(SessionSlot::SwapCatalog).unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("nested/state"));

        store.write(SessionSlot::UserCatalog, "[]").unwrap();

        let path = store.slot_path(SessionSlot::UserCatalog);
        assert!(path.ends_with("skill-swap-users.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
        assert_eq!(
            store.read(SessionSlot::UserCatalog).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_overwrite_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        store.write(SessionSlot::CurrentUser, "{\"a\":1}").unwrap();
        store.write(SessionSlot::CurrentUser, "{\"a\":2}").unwrap();

        assert_eq!(
            store.read(SessionSlot::CurrentUser).unwrap().as_deref(),
            Some("{\"a\":2}")
        );
        assert!(!store.temp_path(SessionSlot::CurrentUser).exists());
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        store.write(SessionSlot::CurrentUser, "{}").unwrap();
        store.clear(SessionSlot::CurrentUser).unwrap();
        assert!(!store.slot_path(SessionSlot::CurrentUser).exists());
        store.clear(SessionSlot::CurrentUser).unwrap();
    }

    #[test]
    fn test_blank_file_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        fs::write(store.slot_path(SessionSlot::CurrentUser), "  \n").unwrap();
        assert_eq!(store.read(SessionSlot::CurrentUser).unwrap(), None);
    }
}
