//! UserProfile domain model.
//!
//! Represents a member of the exchange: identity, the skills they offer and
//! want, availability, visibility and aggregate ratings.

use serde::{Deserialize, Serialize};

/// Availability label given to freshly registered users.
pub const DEFAULT_AVAILABILITY: &str = "Weekends";

/// Bio given to freshly registered users.
pub const DEFAULT_BIO: &str = "Just joined! Looking forward to swapping skills.";

/// Aggregate rating shown on profile cards.
///
/// `average` and `count` are stored as-is; nothing recomputes one from the
/// other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub average: f64,
    pub count: u32,
}

/// User profile domain model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// Ordered skill names; duplicates are allowed.
    #[serde(default)]
    pub skills_offered: Vec<String>,
    #[serde(default)]
    pub skills_wanted: Vec<String>,
    /// Free-text labels such as "Weekends" or "Evenings".
    #[serde(default)]
    pub availability: Vec<String>,
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub ratings: Ratings,
}

impl UserProfile {
    /// Builds the profile synthesized by a registration-shaped login.
    ///
    /// Skill lists start empty, the profile is public and unrated.
    pub fn registered(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            location: None,
            profile_photo_url: Some(avatar_url.into()),
            skills_offered: Vec::new(),
            skills_wanted: Vec::new(),
            availability: vec![DEFAULT_AVAILABILITY.to_string()],
            is_public: true,
            bio: Some(DEFAULT_BIO.to_string()),
            ratings: Ratings::default(),
        }
    }

    /// Returns the first whitespace-separated word of the display name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Returns up to two upper-cased leading characters of the name, used
    /// where no photo is available.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    /// Returns true if `skill` is listed among the offered skills.
    pub fn offers(&self, skill: &str) -> bool {
        self.skills_offered.iter().any(|s| s == skill)
    }

    /// Applies a partial update, replacing every field present in `update`.
    ///
    /// Arrays are replaced wholesale. The `id` is never touched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            email,
            location,
            profile_photo_url,
            skills_offered,
            skills_wanted,
            availability,
            is_public,
            bio,
            ratings,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(url) = profile_photo_url {
            self.profile_photo_url = url;
        }
        if let Some(skills) = skills_offered {
            self.skills_offered = skills;
        }
        if let Some(skills) = skills_wanted {
            self.skills_wanted = skills;
        }
        if let Some(availability) = availability {
            self.availability = availability;
        }
        if let Some(is_public) = is_public {
            self.is_public = is_public;
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(ratings) = ratings {
            self.ratings = ratings;
        }
    }
}

/// Partial profile used by `update_user`.
///
/// `None` leaves a field untouched. For fields that are optional on the
/// profile, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_offered: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_wanted: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Ratings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            location: Some("Berlin".to_string()),
            profile_photo_url: None,
            skills_offered: vec!["React".to_string(), "Photography".to_string()],
            skills_wanted: vec!["Cooking".to_string()],
            availability: vec!["Evenings".to_string()],
            is_public: true,
            bio: Some("Frontend dev".to_string()),
            ratings: Ratings {
                average: 4.5,
                count: 12,
            },
        }
    }

    #[test]
    fn test_registered_profile_defaults() {
        let user = UserProfile::registered("id-1", "new@x.com", "Nia", "https://img/p.png");
        assert!(user.skills_offered.is_empty());
        assert!(user.skills_wanted.is_empty());
        assert!(user.is_public);
        assert_eq!(user.availability, vec!["Weekends".to_string()]);
        assert_eq!(user.ratings, Ratings::default());
        assert_eq!(user.profile_photo_url.as_deref(), Some("https://img/p.png"));
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut user = sample();
        user.apply(ProfileUpdate {
            name: Some("Alice J.".to_string()),
            skills_offered: Some(vec!["Rust".to_string()]),
            ..Default::default()
        });

        assert_eq!(user.name, "Alice J.");
        assert_eq!(user.skills_offered, vec!["Rust".to_string()]);
        // untouched
        assert_eq!(user.skills_wanted, vec!["Cooking".to_string()]);
        assert_eq!(user.location.as_deref(), Some("Berlin"));
        assert_eq!(user.id, "u1");
    }

    #[test]
    fn test_apply_can_clear_optional_fields() {
        let mut user = sample();
        user.apply(ProfileUpdate {
            location: Some(None),
            ..Default::default()
        });
        assert!(user.location.is_none());
        assert_eq!(user.bio.as_deref(), Some("Frontend dev"));
    }

    #[test]
    fn test_camel_case_layout() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["skillsOffered"][0], "React");
        assert_eq!(json["isPublic"], true);
        assert_eq!(json["ratings"]["count"], 12);
        assert!(json.get("profilePhotoUrl").is_none());
    }

    #[test]
    fn test_first_name_and_initials() {
        let user = sample();
        assert_eq!(user.first_name(), "Alice");
        assert_eq!(user.initials(), "AL");
    }
}
