//! Swap domain module.

mod model;
mod repository;

pub use model::{SkillSwap, SwapRole, SwapStatus};
pub use repository::SwapRepository;
