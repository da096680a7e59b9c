//! Swap repository trait.

use crate::error::Result;
use crate::swap::model::SkillSwap;

/// Repository over the swap-request catalog.
///
/// Same contract as [`crate::user::UserRepository`]: infallible in-memory
/// mutations, fallible whole-catalog `flush`.
pub trait SwapRepository: Send + Sync {
    /// Returns every swap in insertion order.
    fn list(&self) -> Vec<SkillSwap>;

    /// Finds a swap by id.
    fn find_by_id(&self, id: &str) -> Option<SkillSwap>;

    /// Appends a swap unchanged. Duplicates are not checked.
    fn insert(&mut self, swap: SkillSwap);

    /// Replaces the entry with the same id; `false` if there was none.
    fn replace(&mut self, swap: SkillSwap) -> bool;

    /// Persists the full catalog.
    fn flush(&self) -> Result<()>;
}
