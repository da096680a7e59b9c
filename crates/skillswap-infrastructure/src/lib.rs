//! Infrastructure for the SkillSwap session layer: session store backends,
//! slot-backed repositories, the seed catalog, paths and configuration.

pub mod config_service;
pub mod fixtures;
pub mod paths;
pub mod repository;
pub mod store;

pub use config_service::ConfigService;
pub use fixtures::SeedCatalog;
pub use repository::{SlotSwapRepository, SlotUserRepository};
pub use store::{FileSessionStore, MemorySessionStore};
