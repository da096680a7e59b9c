//! Profile edit form handling.

use skillswap_core::user::{ProfileUpdate, UserProfile};

/// Splits a comma-separated skill field, trimming entries and dropping
/// empty ones.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The edit-profile form: name, bio and the two skill fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditForm {
    pub name: String,
    pub bio: String,
    pub skills_offered: String,
    pub skills_wanted: String,
}

impl ProfileEditForm {
    /// Prefills the form from the current profile.
    pub fn from_user(user: &UserProfile) -> Self {
        Self {
            name: user.name.clone(),
            bio: user.bio.clone().unwrap_or_default(),
            skills_offered: user.skills_offered.join(", "),
            skills_wanted: user.skills_wanted.join(", "),
        }
    }

    /// The update replacing the four edited fields.
    pub fn into_update(self) -> ProfileUpdate {
        ProfileUpdate {
            name: Some(self.name),
            bio: Some(Some(self.bio)),
            skills_offered: Some(parse_skill_list(&self.skills_offered)),
            skills_wanted: Some(parse_skill_list(&self.skills_wanted)),
            ..Default::default()
        }
    }
}
