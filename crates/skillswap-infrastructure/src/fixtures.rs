//! Built-in seed catalog.
//!
//! Loaded once at startup when the store holds no usable catalog.

use chrono::{DateTime, Utc};
use skillswap_core::swap::{SkillSwap, SwapStatus};
use skillswap_core::user::{Ratings, UserProfile};

/// Initial user and swap records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedCatalog {
    pub users: Vec<UserProfile>,
    pub swaps: Vec<SkillSwap>,
}

impl SeedCatalog {
    /// A catalog with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a catalog from explicit records.
    pub fn new(users: Vec<UserProfile>, swaps: Vec<SkillSwap>) -> Self {
        Self { users, swaps }
    }

    /// The first seed user, used as the login fallback.
    pub fn default_user(&self) -> Option<&UserProfile> {
        self.users.first()
    }

    /// The demo community shipped with the application.
    pub fn builtin() -> Self {
        let users = vec![
            user(
                "1",
                "Alice Johnson",
                "alice@example.com",
                Some("San Francisco, CA"),
                &["React", "TypeScript", "UI Design"],
                &["Photography", "Public Speaking"],
                &["Weekends", "Evenings"],
                true,
                "Frontend developer who loves clean interfaces.",
                (4.8, 24),
            ),
            user(
                "2",
                "Ben Carter",
                "ben@example.com",
                Some("Austin, TX"),
                &["Photography", "Photo Editing", "Lightroom"],
                &["React", "Node.js"],
                &["Weekends"],
                true,
                "Street photographer learning to build a portfolio site.",
                (4.6, 15),
            ),
            user(
                "3",
                "Chloe Davis",
                "chloe@example.com",
                Some("London, UK"),
                &["Public Speaking", "Copywriting", "SEO"],
                &["UI Design", "Figma"],
                &["Evenings"],
                true,
                "Marketing lead and conference speaker.",
                (4.9, 31),
            ),
            user(
                "4",
                "Diego Fernandez",
                "diego@example.com",
                Some("Madrid, Spain"),
                &["Spanish", "Guitar", "Cooking"],
                &["English Conversation", "Photography"],
                &["Weekday Mornings", "Weekends"],
                true,
                "Musician and home cook.",
                (4.7, 9),
            ),
            user(
                "5",
                "Emma Wilson",
                "emma@example.com",
                None,
                &["Yoga", "Meditation"],
                &["Spanish"],
                &["Evenings"],
                false,
                "Prefers to keep a low profile.",
                (5.0, 3),
            ),
            user(
                "6",
                "Farah Khan",
                "farah@example.com",
                Some("Toronto, Canada"),
                &["Node.js", "PostgreSQL", "Docker"],
                &["Guitar", "Copywriting"],
                &["Weekends"],
                true,
                "Backend engineer, amateur guitarist.",
                (4.4, 11),
            ),
        ];

        let swaps = vec![
            swap(
                "swap-1",
                &users[1],
                &users[0],
                "Photography",
                "React",
                "Would love to learn React in exchange for a photo walk!",
                SwapStatus::Pending,
                1_714_557_600,
            ),
            swap(
                "swap-2",
                &users[0],
                &users[2],
                "UI Design",
                "Public Speaking",
                "Your talk at the meetup was great. Interested in a swap?",
                SwapStatus::Accepted,
                1_714_125_600,
            ),
            swap(
                "swap-3",
                &users[3],
                &users[5],
                "Guitar",
                "Node.js",
                "Guitar lessons for some backend help?",
                SwapStatus::Pending,
                1_714_903_200,
            ),
        ];

        Self { users, swaps }
    }
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    location: Option<&str>,
    offered: &[&str],
    wanted: &[&str],
    availability: &[&str],
    is_public: bool,
    bio: &str,
    (average, count): (f64, u32),
) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        location: location.map(str::to_string),
        profile_photo_url: Some(format!("https://placehold.co/100x100.png?text={}", id)),
        skills_offered: strings(offered),
        skills_wanted: strings(wanted),
        availability: strings(availability),
        is_public,
        bio: Some(bio.to_string()),
        ratings: Ratings { average, count },
    }
}

#[allow(clippy::too_many_arguments)]
fn swap(
    id: &str,
    requester: &UserProfile,
    receiver: &UserProfile,
    offered_skill: &str,
    requested_skill: &str,
    message: &str,
    status: SwapStatus,
    created_secs: i64,
) -> SkillSwap {
    let created_at = at(created_secs);
    SkillSwap {
        id: id.to_string(),
        requester_id: requester.id.clone(),
        requester_name: requester.name.clone(),
        requester_photo_url: requester.profile_photo_url.clone(),
        receiver_id: receiver.id.clone(),
        receiver_name: receiver.name.clone(),
        receiver_photo_url: receiver.profile_photo_url.clone(),
        offered_skill: offered_skill.to_string(),
        requested_skill: requested_skill.to_string(),
        message: Some(message.to_string()),
        status,
        created_at,
        updated_at: created_at,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
