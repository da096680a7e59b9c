//! In-memory session store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use skillswap_core::error::{Result, SkillSwapError};
use skillswap_core::session::{SessionSlot, SessionStore};

/// Session store backed by a map, the closest analogue of tab storage.
///
/// An optional byte quota rejects writes that would grow the stored text
/// past the limit, and the store can be switched to "unavailable" to model
/// environments without session storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: RwLock<HashMap<SessionSlot, String>>,
    quota_bytes: Option<usize>,
    unavailable: AtomicBool,
}

impl MemorySessionStore {
    /// Creates an empty store without quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose total stored text may not exceed
    /// `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Makes every subsequent operation fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Seeds a slot directly, bypassing quota and availability.
    pub fn insert_raw(&self, slot: SessionSlot, text: impl Into<String>) {
        if let Ok(mut slots) = self.slots.write() {
            slots.insert(slot, text.into());
        }
    }

    /// Returns the total number of bytes currently stored.
    pub fn used_bytes(&self) -> usize {
        self.slots
            .read()
            .map(|slots| slots.values().map(String::len).sum())
            .unwrap_or(0)
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(SkillSwapError::storage("session storage is unavailable"))
        } else {
            Ok(())
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, slot: SessionSlot) -> Result<Option<String>> {
        self.check_available()?;
        let slots = self
            .slots
            .read()
            .map_err(|e| SkillSwapError::internal(format!("Lock poisoned: {}", e)))?;
        Ok(slots.get(&slot).cloned())
    }

    fn write(&self, slot: SessionSlot, text: &str) -> Result<()> {
        self.check_available()?;
        let mut slots = self
            .slots
            .write()
            .map_err(|e| SkillSwapError::internal(format!("Lock poisoned: {}", e)))?;

        if let Some(quota) = self.quota_bytes {
            let others: usize = slots
                .iter()
                .filter(|(key, _)| **key != slot)
                .map(|(_, value)| value.len())
                .sum();
            if others + text.len() > quota {
                return Err(SkillSwapError::storage(format!(
                    "quota exceeded writing '{}': {} bytes over a {} byte quota",
                    slot.key(),
                    others + text.len(),
                    quota
                )));
            }
        }

        slots.insert(slot, text.to_string());
        Ok(())
    }

    fn clear(&self, slot: SessionSlot) -> Result<()> {
        self.check_available()?;
        let mut slots = self
            .slots
            .write()
            .map_err(|e| SkillSwapError::internal(format!("Lock poisoned: {}", e)))?;
        slots.remove(&slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.read(SessionSlot::CurrentUser).unwrap(), None);

        store.write(SessionSlot::CurrentUser, "{\"id\":\"u1\"}").unwrap();
        assert_eq!(
            store.read(SessionSlot::CurrentUser).unwrap().as_deref(),
            Some("{\"id\":\"u1\"}")
        );

        store.clear(SessionSlot::CurrentUser).unwrap();
        assert_eq!(store.read(SessionSlot::CurrentUser).unwrap(), None);
        // clearing twice is fine
        store.clear(SessionSlot::CurrentUser).unwrap();
    }

    #[test]
    fn test_quota_rejects_oversized_write_and_keeps_old_value() {
        let store = MemorySessionStore::with_quota(10);
        store.write(SessionSlot::UserCatalog, "[1,2,3]").unwrap();

        let err = store
            .write(SessionSlot::SwapCatalog, "[1,2,3,4]")
            .unwrap_err();
        assert!(err.is_storage());
        assert_eq!(store.read(SessionSlot::SwapCatalog).unwrap(), None);

        // overwriting the same slot only counts the new text
        store.write(SessionSlot::UserCatalog, "[1,2,3,4]").unwrap();
        assert_eq!(store.used_bytes(), 9);
    }

    #[test]
    fn test_unavailable_store_fails_every_operation() {
        let store = MemorySessionStore::new();
        store.set_unavailable(true);
        assert!(store.read(SessionSlot::CurrentUser).is_err());
        assert!(store.write(SessionSlot::CurrentUser, "{}").is_err());
        assert!(store.clear(SessionSlot::CurrentUser).is_err());

        store.set_unavailable(false);
        assert!(store.write(SessionSlot::CurrentUser, "{}").is_ok());
    }
}
