//! Swap request composition.
//!
//! Turns what a requester picked into a [`SkillSwap`], copying both
//! parties' display names and photos at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillswap_core::error::{Result, SkillSwapError};
use skillswap_core::swap::{SkillSwap, SwapStatus};
use skillswap_core::user::UserProfile;

/// The requester's choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequestDraft {
    /// One of the requester's offered skills.
    pub offered_skill: String,
    /// One of the receiver's offered skills.
    pub requested_skill: String,
    /// `None` uses [`default_message`]; a blank message is dropped.
    pub message: Option<String>,
}

impl SwapRequestDraft {
    pub fn new(offered_skill: impl Into<String>, requested_skill: impl Into<String>) -> Self {
        Self {
            offered_skill: offered_skill.into(),
            requested_skill: requested_skill.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Greeting prefilled into a new request.
pub fn default_message(receiver: &UserProfile) -> String {
    format!(
        "Hi {}, I'd love to swap skills with you!",
        receiver.first_name()
    )
}

/// Builds a pending swap from `requester` to `receiver`.
///
/// Both skills must be chosen from the respective `skills_offered` lists and
/// a user cannot request a swap with themselves.
pub fn compose_swap(
    requester: &UserProfile,
    receiver: &UserProfile,
    draft: SwapRequestDraft,
    id: String,
    now: DateTime<Utc>,
) -> Result<SkillSwap> {
    if requester.id == receiver.id {
        return Err(SkillSwapError::validation("cannot request a swap with yourself"));
    }

    let offered_skill = draft.offered_skill.trim().to_string();
    let requested_skill = draft.requested_skill.trim().to_string();

    if offered_skill.is_empty() {
        return Err(SkillSwapError::validation("Please select a skill to offer."));
    }
    if requested_skill.is_empty() {
        return Err(SkillSwapError::validation("Please select a skill to request."));
    }
    if !requester.offers(&offered_skill) {
        return Err(SkillSwapError::validation(format!(
            "'{}' is not one of your offered skills",
            offered_skill
        )));
    }
    if !receiver.offers(&requested_skill) {
        return Err(SkillSwapError::validation(format!(
            "{} does not offer '{}'",
            receiver.name, requested_skill
        )));
    }

    let message = match draft.message {
        None => Some(default_message(receiver)),
        Some(text) if text.trim().is_empty() => None,
        Some(text) => Some(text),
    };

    Ok(SkillSwap {
        id,
        requester_id: requester.id.clone(),
        requester_name: requester.name.clone(),
        requester_photo_url: requester.profile_photo_url.clone(),
        receiver_id: receiver.id.clone(),
        receiver_name: receiver.name.clone(),
        receiver_photo_url: receiver.profile_photo_url.clone(),
        offered_skill,
        requested_skill,
        message,
        status: SwapStatus::Pending,
        created_at: now,
        updated_at: now,
    })
}
