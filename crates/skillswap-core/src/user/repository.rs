//! User repository trait.

use crate::error::Result;
use crate::user::model::UserProfile;

/// Repository over the user catalog.
///
/// Mutations act on the in-memory catalog and cannot fail; `flush` writes the
/// whole catalog to backing storage. Keeping the two apart lets callers keep
/// working from memory when storage is unavailable.
pub trait UserRepository: Send + Sync {
    /// Returns every known user in catalog order.
    fn list(&self) -> Vec<UserProfile>;

    /// Finds the first user whose email matches exactly.
    fn find_by_email(&self, email: &str) -> Option<UserProfile>;

    /// Finds a user by id.
    fn find_by_id(&self, id: &str) -> Option<UserProfile>;

    /// Appends a user. Id uniqueness is not checked.
    fn insert(&mut self, user: UserProfile);

    /// Replaces the entry with the same id.
    ///
    /// # Returns
    ///
    /// `true` if an entry was replaced, `false` if no entry had that id.
    fn update(&mut self, user: UserProfile) -> bool;

    /// Persists the full catalog.
    fn flush(&self) -> Result<()>;
}
