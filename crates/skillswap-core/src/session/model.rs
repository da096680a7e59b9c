//! Session state models shared by the context and its consumers.

use serde::{Deserialize, Serialize};

use crate::swap::SkillSwap;
use crate::user::UserProfile;

/// Lifecycle of a session context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Constructed, slots not yet loaded.
    #[default]
    Uninitialized,
    /// Hydration finished; operations are accepted.
    Ready,
}

/// Arguments of a login call.
///
/// A present `name` turns the call into a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LoginRequest {
    /// Login of an existing user by email.
    pub fn existing(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Registration of a new user.
    pub fn register(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }

    /// The trimmed name to register under, `None` when absent or blank.
    pub fn registration_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Returns true if this call registers a new user. A blank name does not.
    pub fn is_registration(&self) -> bool {
        self.registration_name().is_some()
    }
}

/// What consumers read from the context: `{user, users, swaps, loading}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<UserProfile>,
    pub users: Vec<UserProfile>,
    pub swaps: Vec<SkillSwap>,
    pub loading: bool,
}
