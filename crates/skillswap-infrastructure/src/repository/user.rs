//! User catalog repository mirrored into the user-catalog slot.

use std::sync::Arc;

use skillswap_core::error::Result;
use skillswap_core::session::{SessionSlot, SessionStore};
use skillswap_core::user::{UserProfile, UserRepository};

use super::slot::{read_slot, write_slot};

/// User repository holding the live catalog in memory and writing the whole
/// list to [`SessionSlot::UserCatalog`] on `flush`.
pub struct SlotUserRepository {
    store: Arc<dyn SessionStore>,
    users: Vec<UserProfile>,
}

impl SlotUserRepository {
    /// Loads the catalog from the store, falling back to `seed` when the slot
    /// is empty or unusable.
    pub fn hydrate(store: Arc<dyn SessionStore>, seed: Vec<UserProfile>) -> Self {
        let users = read_slot(store.as_ref(), SessionSlot::UserCatalog).or(seed);
        tracing::debug!(count = users.len(), "User catalog hydrated");
        Self { store, users }
    }
}

impl UserRepository for SlotUserRepository {
    fn list(&self) -> Vec<UserProfile> {
        self.users.clone()
    }

    fn find_by_email(&self, email: &str) -> Option<UserProfile> {
        self.users.iter().find(|u| u.email == email).cloned()
    }

    fn find_by_id(&self, id: &str) -> Option<UserProfile> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn insert(&mut self, user: UserProfile) {
        self.users.push(user);
    }

    fn update(&mut self, user: UserProfile) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user;
                true
            }
            None => false,
        }
    }

    fn flush(&self) -> Result<()> {
        write_slot(self.store.as_ref(), SessionSlot::UserCatalog, &self.users)
    }
}
