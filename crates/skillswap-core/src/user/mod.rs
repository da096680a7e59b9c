//! User domain module.
//!
//! - `model`: user profile and partial update
//! - `repository`: user catalog repository trait

mod model;
mod repository;

// Re-export public API
pub use model::{DEFAULT_AVAILABILITY, DEFAULT_BIO, ProfileUpdate, Ratings, UserProfile};
pub use repository::UserRepository;
