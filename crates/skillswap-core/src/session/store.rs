//! Session store contract.
//!
//! A tab-scoped key-value shim holding three slots of UTF-8 JSON text.

use strum::{Display, EnumIter, IntoStaticStr};

use crate::error::Result;

/// One named key in the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum SessionSlot {
    /// The logged-in user, a single profile object.
    #[strum(serialize = "skill-swap-user")]
    CurrentUser,
    /// The full user catalog, an array of profiles.
    #[strum(serialize = "skill-swap-users")]
    UserCatalog,
    /// The full swap catalog, an array of swaps.
    #[strum(serialize = "skill-swap-swaps")]
    SwapCatalog,
}

impl SessionSlot {
    /// Returns the storage key for this slot.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Key-value persistence shim behind the session context.
///
/// Implementations are last-writer-wins and do no merging. Errors describe
/// why storage could not be used; callers decide whether to surface them.
pub trait SessionStore: Send + Sync {
    /// Reads the text stored in `slot`, `None` if the slot is empty.
    fn read(&self, slot: SessionSlot) -> Result<Option<String>>;

    /// Overwrites `slot` with `text`.
    fn write(&self, slot: SessionSlot, text: &str) -> Result<()>;

    /// Empties `slot`. Clearing an empty slot succeeds.
    fn clear(&self, slot: SessionSlot) -> Result<()>;
}
