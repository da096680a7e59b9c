//! SkillSwap domain model and status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Result, SkillSwapError};

/// Lifecycle status of a swap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl SwapStatus {
    /// Returns true if no further transition is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Cancelled)
    }

    /// Returns true if the lifecycle allows moving from `self` to `next`.
    ///
    /// ```text
    /// pending  -> accepted | rejected | cancelled
    /// accepted -> completed | cancelled
    /// ```
    pub fn can_transition_to(self, next: SwapStatus) -> bool {
        use SwapStatus::*;
        matches!(
            (self, next),
            (Pending, Accepted)
                | (Pending, Rejected)
                | (Pending, Cancelled)
                | (Accepted, Completed)
                | (Accepted, Cancelled)
        )
    }
}

/// Which side of a swap a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRole {
    Requester,
    Receiver,
}

/// A request from one user to trade a skill they offer for one the
/// counterpart offers.
///
/// Names and photos of both parties are copied at creation and are not kept
/// in sync with the live profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSwap {
    pub id: String,
    pub requester_id: String,
    pub requester_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_photo_url: Option<String>,
    pub receiver_id: String,
    pub receiver_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_photo_url: Option<String>,
    pub offered_skill: String,
    pub requested_skill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SkillSwap {
    /// Returns the role `user_id` plays in this swap, if any.
    pub fn role_of(&self, user_id: &str) -> Option<SwapRole> {
        if self.requester_id == user_id {
            Some(SwapRole::Requester)
        } else if self.receiver_id == user_id {
            Some(SwapRole::Receiver)
        } else {
            None
        }
    }

    /// Moves the swap to `next` on behalf of `actor_id`.
    ///
    /// Only the receiver accepts or rejects a pending request and only the
    /// requester withdraws it. Either party may complete or cancel an
    /// accepted swap. Nothing changes when an error is returned.
    pub fn transition(
        &mut self,
        actor_id: &str,
        next: SwapStatus,
        at: DateTime<Utc>,
    ) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(SkillSwapError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }

        let role = self.role_of(actor_id);
        let allowed = match (self.status, next) {
            (SwapStatus::Pending, SwapStatus::Accepted | SwapStatus::Rejected) => {
                role == Some(SwapRole::Receiver)
            }
            (SwapStatus::Pending, SwapStatus::Cancelled) => role == Some(SwapRole::Requester),
            _ => role.is_some(),
        };

        if !allowed {
            return Err(SkillSwapError::NotParticipant {
                user_id: actor_id.to_string(),
                swap_id: self.id.clone(),
                action: verb(next).to_string(),
            });
        }

        self.status = next;
        self.updated_at = at;
        Ok(())
    }
}

fn verb(status: SwapStatus) -> &'static str {
    match status {
        SwapStatus::Pending => "reopen",
        SwapStatus::Accepted => "accept",
        SwapStatus::Rejected => "reject",
        SwapStatus::Completed => "complete",
        SwapStatus::Cancelled => "cancel",
    }
}
