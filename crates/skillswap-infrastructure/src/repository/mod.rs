//! Slot-backed repositories for the user and swap catalogs.

mod slot;
mod swap;
mod user;

pub use slot::{SlotRead, read_slot, write_slot};
pub use swap::SlotSwapRepository;
pub use user::SlotUserRepository;
