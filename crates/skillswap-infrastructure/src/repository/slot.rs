//! JSON encoding of catalogs into session slots.

use serde::Serialize;
use serde::de::DeserializeOwned;

use skillswap_core::error::Result;
use skillswap_core::session::{SessionSlot, SessionStore};

/// Outcome of reading a slot during hydration.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotRead<T> {
    /// The slot held well-formed JSON.
    Loaded(T),
    /// Nothing stored yet.
    Empty,
    /// The store failed or the text did not parse; already logged.
    Unusable,
}

impl<T> SlotRead<T> {
    /// Returns the loaded value, or `fallback` for an empty or unusable slot.
    pub fn or(self, fallback: T) -> T {
        match self {
            SlotRead::Loaded(value) => value,
            SlotRead::Empty | SlotRead::Unusable => fallback,
        }
    }

    /// Converts into an option, dropping the reason for absence.
    pub fn loaded(self) -> Option<T> {
        match self {
            SlotRead::Loaded(value) => Some(value),
            SlotRead::Empty | SlotRead::Unusable => None,
        }
    }
}

/// Reads and decodes `slot`, logging storage and parse failures.
pub fn read_slot<T: DeserializeOwned>(store: &dyn SessionStore, slot: SessionSlot) -> SlotRead<T> {
    let text = match store.read(slot) {
        Ok(Some(text)) => text,
        Ok(None) => return SlotRead::Empty,
        Err(e) => {
            tracing::warn!(
                slot = slot.key(),
                error = %e,
                "Session store unavailable, using defaults"
            );
            return SlotRead::Unusable;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => SlotRead::Loaded(value),
        Err(e) => {
            tracing::warn!(slot = slot.key(), error = %e, "Corrupt session slot, using defaults");
            SlotRead::Unusable
        }
    }
}

/// Encodes `value` as JSON and overwrites `slot` with it.
pub fn write_slot<T: Serialize + ?Sized>(
    store: &dyn SessionStore,
    slot: SessionSlot,
    value: &T,
) -> Result<()> {
    let text = serde_json::to_string(value)?;
    store.write(slot, &text)?;
    tracing::debug!(slot = slot.key(), bytes = text.len(), "Session slot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySessionStore;

    #[test]
    fn test_empty_and_corrupt_slots() {
        let store = MemorySessionStore::new();
        let read: SlotRead<Vec<u32>> = read_slot(&store, SessionSlot::UserCatalog);
        assert_eq!(read, SlotRead::Empty);

        store.insert_raw(SessionSlot::UserCatalog, "[1, 2,");
        let read: SlotRead<Vec<u32>> = read_slot(&store, SessionSlot::UserCatalog);
        assert_eq!(read, SlotRead::Unusable);
        assert_eq!(read.or(vec![7]), vec![7]);
    }

    #[test]
    fn test_write_then_read() {
        let store = MemorySessionStore::new();
        write_slot(&store, SessionSlot::SwapCatalog, &vec![1u32, 2, 3]).unwrap();
        let read: SlotRead<Vec<u32>> = read_slot(&store, SessionSlot::SwapCatalog);
        assert_eq!(read.loaded(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_unavailable_store_is_unusable() {
        let store = MemorySessionStore::new();
        store.set_unavailable(true);
        let read: SlotRead<Vec<u32>> = read_slot(&store, SessionSlot::SwapCatalog);
        assert_eq!(read, SlotRead::Unusable);
        assert!(write_slot(&store, SessionSlot::SwapCatalog, &Vec::<u32>::new()).is_err());
    }
}
