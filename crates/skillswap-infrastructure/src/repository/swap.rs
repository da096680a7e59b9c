//! Swap catalog repository mirrored into the swap-catalog slot.

use std::sync::Arc;

use skillswap_core::error::Result;
use skillswap_core::session::{SessionSlot, SessionStore};
use skillswap_core::swap::{SkillSwap, SwapRepository};

use super::slot::{read_slot, write_slot};

/// Swap repository holding the live catalog in memory and writing the whole
/// list to [`SessionSlot::SwapCatalog`] on `flush`.
pub struct SlotSwapRepository {
    store: Arc<dyn SessionStore>,
    swaps: Vec<SkillSwap>,
}

impl SlotSwapRepository {
    /// Loads the catalog from the store, falling back to `seed`.
    pub fn hydrate(store: Arc<dyn SessionStore>, seed: Vec<SkillSwap>) -> Self {
        let swaps = read_slot(store.as_ref(), SessionSlot::SwapCatalog).or(seed);
        tracing::debug!(count = swaps.len(), "Swap catalog hydrated");
        Self { store, swaps }
    }
}

impl SwapRepository for SlotSwapRepository {
    fn list(&self) -> Vec<SkillSwap> {
        self.swaps.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<SkillSwap> {
        self.swaps.iter().find(|s| s.id == id).cloned()
    }

    fn insert(&mut self, swap: SkillSwap) {
        self.swaps.push(swap);
    }

    fn replace(&mut self, swap: SkillSwap) -> bool {
        match self.swaps.iter_mut().find(|s| s.id == swap.id) {
            Some(existing) => {
                *existing = swap;
                true
            }
            None => false,
        }
    }

    fn flush(&self) -> Result<()> {
        write_slot(self.store.as_ref(), SessionSlot::SwapCatalog, &self.swaps)
    }
}
