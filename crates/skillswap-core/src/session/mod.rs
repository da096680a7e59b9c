//! Session domain module.
//!
//! - `model`: phase, login arguments and the consumer snapshot
//! - `store`: the slot-based persistence shim contract

mod model;
mod store;

pub use model::{LoginRequest, SessionPhase, SessionSnapshot};
pub use store::{SessionSlot, SessionStore};
