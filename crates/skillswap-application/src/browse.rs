//! Browsing queries over the user catalog: the public directory, skill
//! search and single-profile lookup.

use serde::Serialize;

use skillswap_core::error::{Result, SkillSwapError};
use skillswap_core::user::UserProfile;

/// Number of skills of each kind shown on a profile card.
pub const CARD_SKILL_LIMIT: usize = 3;

/// Public profiles in catalog order.
pub fn public_profiles(users: &[UserProfile]) -> Vec<&UserProfile> {
    users.iter().filter(|u| u.is_public).collect()
}

/// Public profiles offering or wanting a skill containing `query`,
/// case-insensitively. A blank query matches every public profile.
pub fn search_by_skill<'a>(users: &'a [UserProfile], query: &str) -> Vec<&'a UserProfile> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return public_profiles(users);
    }

    users
        .iter()
        .filter(|u| u.is_public)
        .filter(|u| {
            u.skills_offered
                .iter()
                .chain(u.skills_wanted.iter())
                .any(|skill| skill.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Looks up a profile that may be shown to others.
///
/// Private profiles are reported as not found.
pub fn find_public_profile<'a>(users: &'a [UserProfile], id: &str) -> Result<&'a UserProfile> {
    users
        .iter()
        .find(|u| u.id == id && u.is_public)
        .ok_or_else(|| SkillSwapError::not_found("user", id))
}

/// Listing summary of a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub id: String,
    pub name: String,
    /// Avatar fallback text.
    pub initials: String,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    /// e.g. `"4.5 (12)"`
    pub rating_label: String,
    pub top_offered: Vec<String>,
    pub top_wanted: Vec<String>,
}

impl From<&UserProfile> for ProfileCard {
    fn from(user: &UserProfile) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            initials: user.initials(),
            photo_url: user.profile_photo_url.clone(),
            location: user.location.clone(),
            rating_label: format!("{:.1} ({})", user.ratings.average, user.ratings.count),
            top_offered: user
                .skills_offered
                .iter()
                .take(CARD_SKILL_LIMIT)
                .cloned()
                .collect(),
            top_wanted: user
                .skills_wanted
                .iter()
                .take(CARD_SKILL_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_infrastructure::SeedCatalog;

    #[test]
    fn test_public_profiles_skip_private() {
        let users = SeedCatalog::builtin().users;
        let public = public_profiles(&users);
        assert_eq!(public.len(), 5);
        assert!(public.iter().all(|u| u.is_public));
        assert_eq!(public[0].id, "1");
    }

    #[test]
    fn test_search_matches_offered_and_wanted_case_insensitive() {
        let users = SeedCatalog::builtin().users;

        let ids: Vec<&str> = search_by_skill(&users, "photo")
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        // Alice wants Photography, Ben offers it, Diego wants it
        assert_eq!(ids, vec!["1", "2", "4"]);

        // Emma offers Yoga but is private
        assert!(search_by_skill(&users, "YOGA").is_empty());
        assert_eq!(search_by_skill(&users, "  ").len(), 5);
    }

    #[test]
    fn test_find_public_profile() {
        let users = SeedCatalog::builtin().users;
        assert_eq!(find_public_profile(&users, "3").unwrap().name, "Chloe Davis");
        assert!(find_public_profile(&users, "5").unwrap_err().is_not_found());
        assert!(find_public_profile(&users, "nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_profile_card() {
        let mut user = SeedCatalog::builtin().users[0].clone();
        user.skills_offered.push("Rust".to_string());
        let card = ProfileCard::from(&user);

        assert_eq!(card.initials, "AL");
        assert_eq!(card.rating_label, "4.8 (24)");
        assert_eq!(card.top_offered, vec!["React", "TypeScript", "UI Design"]);
        assert_eq!(card.top_wanted.len(), 2);
    }
}
