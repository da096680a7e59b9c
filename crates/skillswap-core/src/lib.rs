//! Domain layer of the SkillSwap session layer: user and swap models,
//! repository and store contracts, configuration model and error type.

pub mod config;
pub mod error;
pub mod session;
pub mod swap;
pub mod user;

// Re-export common error type
pub use error::{Result, SkillSwapError};
