//! Session context: the in-memory owner of the current user and both
//! catalogs.
//!
//! The context is constructed with its store and repositories injected,
//! hydrated once, and then driven by consumers through `login`, `logout`,
//! `update_user` and `add_swap`. Every mutation rewrites the full affected
//! slot. Storage failures are logged and swallowed; the in-memory state stays
//! authoritative for the lifetime of the context.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use skillswap_core::config::{LoginMissPolicy, SessionConfig};
use skillswap_core::error::{Result, SkillSwapError};
use skillswap_core::session::{
    LoginRequest, SessionPhase, SessionSlot, SessionSnapshot, SessionStore,
};
use skillswap_core::swap::{SkillSwap, SwapRepository, SwapStatus};
use skillswap_core::user::{ProfileUpdate, UserProfile, UserRepository};
use skillswap_infrastructure::fixtures::SeedCatalog;
use skillswap_infrastructure::repository::{read_slot, write_slot};
use skillswap_infrastructure::{SlotSwapRepository, SlotUserRepository};

use crate::browse;
use crate::swap_request::{SwapRequestDraft, compose_swap};

/// Session state container.
///
/// Methods take `&mut self`; a context is driven by one consumer at a time.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    users: Box<dyn UserRepository>,
    swaps: Box<dyn SwapRepository>,
    config: SessionConfig,
    /// First seed user, the target of `LoginMissPolicy::DefaultUser`.
    default_user: Option<UserProfile>,
    phase: SessionPhase,
    user: Option<UserProfile>,
    loading: bool,
}

impl SessionContext {
    /// Creates an uninitialized context over injected repositories.
    ///
    /// Call [`SessionContext::hydrate`] before using it.
    pub fn new(
        store: Arc<dyn SessionStore>,
        users: Box<dyn UserRepository>,
        swaps: Box<dyn SwapRepository>,
        config: SessionConfig,
        default_user: Option<UserProfile>,
    ) -> Self {
        Self {
            store,
            users,
            swaps,
            config,
            default_user,
            phase: SessionPhase::Uninitialized,
            user: None,
            loading: false,
        }
    }

    /// Builds slot-backed repositories over `store` and hydrates.
    ///
    /// Catalog slots that are empty or unusable fall back to `seed`, or to
    /// empty catalogs when `config.seed_catalog` is off.
    pub fn mount(store: Arc<dyn SessionStore>, seed: SeedCatalog, config: SessionConfig) -> Self {
        let default_user = seed.default_user().cloned();
        let (seed_users, seed_swaps) = if config.seed_catalog {
            (seed.users, seed.swaps)
        } else {
            (Vec::new(), Vec::new())
        };

        let users = SlotUserRepository::hydrate(store.clone(), seed_users);
        let swaps = SlotSwapRepository::hydrate(store.clone(), seed_swaps);

        let mut context = Self::new(
            store,
            Box::new(users),
            Box::new(swaps),
            config,
            default_user,
        );
        context.hydrate();
        context
    }

    /// One-time load of the current-user slot. Later calls do nothing.
    pub fn hydrate(&mut self) {
        if self.phase == SessionPhase::Ready {
            return;
        }

        self.loading = true;
        self.user = read_slot(self.store.as_ref(), SessionSlot::CurrentUser).loaded();
        self.phase = SessionPhase::Ready;
        self.loading = false;

        tracing::info!(
            user_id = self.user.as_ref().map(|u| u.id.as_str()),
            "Session hydrated"
        );
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Returns true if a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The full user catalog.
    pub fn users(&self) -> Vec<UserProfile> {
        self.users.list()
    }

    /// The full swap catalog.
    pub fn swaps(&self) -> Vec<SkillSwap> {
        self.swaps.list()
    }

    /// True only while hydration or a login is running.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The `{user, users, swaps, loading}` view consumers render from.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            users: self.users(),
            swaps: self.swaps(),
            loading: self.loading,
        }
    }

    // ============================================================================
    // Operations
    // ============================================================================

    /// Logs in by email, or registers when `request.name` is present.
    ///
    /// A blank name counts as absent. An email nobody has is handled by the
    /// configured [`LoginMissPolicy`].
    ///
    /// # Returns
    ///
    /// The user this call made current, `None` if the session is unchanged.
    pub fn login(&mut self, request: LoginRequest) -> Option<UserProfile> {
        if !self.ensure_ready("login") {
            return None;
        }

        self.loading = true;

        let name = request.registration_name().map(str::to_string);

        let target = match name {
            Some(name) => Some(self.register(&request.email, &name)),
            None => self.find_login_target(&request.email),
        };

        if let Some(user) = &target {
            tracing::info!(user_id = %user.id, "User logged in");
            self.user = Some(user.clone());
            self.persist_current_user();
        }

        self.loading = false;
        target
    }

    /// Ends the session and clears the current-user slot.
    ///
    /// The catalogs, including the swap catalog, are kept.
    pub fn logout(&mut self) {
        if !self.ensure_ready("logout") {
            return;
        }

        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "User logged out");
        }

        if let Err(e) = self.store.clear(SessionSlot::CurrentUser) {
            tracing::warn!(error = %e, "Could not clear user from session storage");
        }
    }

    /// Shallow-merges `update` into the current user.
    ///
    /// Writes the current-user slot and the matching catalog entry. Without
    /// an active session nothing happens.
    ///
    /// # Returns
    ///
    /// `true` if the update was applied.
    pub fn update_user(&mut self, update: ProfileUpdate) -> bool {
        if !self.ensure_ready("update_user") {
            return false;
        }

        let Some(user) = self.user.as_mut() else {
            tracing::debug!("update_user without an active session ignored");
            return false;
        };

        user.apply(update);
        let updated = user.clone();

        self.persist_current_user();

        if self.users.update(updated.clone()) {
            self.flush_users();
        } else {
            tracing::debug!(
                user_id = %updated.id,
                "Current user not in catalog, catalog unchanged"
            );
        }

        true
    }

    /// Appends `swap` unchanged and rewrites the swap catalog slot.
    pub fn add_swap(&mut self, swap: SkillSwap) {
        if !self.ensure_ready("add_swap") {
            return;
        }

        tracing::info!(
            swap_id = %swap.id,
            requester_id = %swap.requester_id,
            receiver_id = %swap.receiver_id,
            "Swap request added"
        );
        self.swaps.insert(swap);
        self.flush_swaps();
    }

    /// Composes a swap request from the current user to `receiver_id` and
    /// adds it.
    ///
    /// Unlike the four base operations this validates and reports why a
    /// request was refused.
    pub fn request_swap(
        &mut self,
        receiver_id: &str,
        draft: SwapRequestDraft,
    ) -> Result<SkillSwap> {
        self.require_ready()?;
        let requester = self
            .user
            .clone()
            .ok_or(SkillSwapError::NoActiveSession)?;

        let users = self.users.list();
        let receiver = browse::find_public_profile(&users, receiver_id)?;

        let swap = compose_swap(
            &requester,
            receiver,
            draft,
            Uuid::new_v4().to_string(),
            Utc::now(),
        )?;
        self.add_swap(swap.clone());
        Ok(swap)
    }

    /// Moves a swap to `status` on behalf of the current user.
    ///
    /// Nothing changes when an error is returned.
    pub fn update_swap_status(&mut self, swap_id: &str, status: SwapStatus) -> Result<SkillSwap> {
        self.require_ready()?;
        let actor_id = self
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or(SkillSwapError::NoActiveSession)?;

        let mut swap = self
            .swaps
            .find_by_id(swap_id)
            .ok_or_else(|| SkillSwapError::not_found("swap", swap_id))?;

        let from = swap.status;
        swap.transition(&actor_id, status, Utc::now())?;

        self.swaps.replace(swap.clone());
        self.flush_swaps();

        tracing::info!(swap_id, %from, to = %status, "Swap status changed");
        Ok(swap)
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn register(&mut self, email: &str, name: &str) -> UserProfile {
        let user = UserProfile::registered(
            Uuid::new_v4().to_string(),
            email,
            name,
            self.config.placeholder_avatar_url.clone(),
        );
        tracing::info!(user_id = %user.id, "New user registered");
        self.users.insert(user.clone());
        self.flush_users();
        user
    }

    fn find_login_target(&self, email: &str) -> Option<UserProfile> {
        if let Some(user) = self.users.find_by_email(email) {
            return Some(user);
        }

        let fallback = match self.config.login_miss {
            LoginMissPolicy::Ignore => None,
            // the live entry carries persisted edits the seed copy lacks
            LoginMissPolicy::DefaultUser => self
                .default_user
                .as_ref()
                .and_then(|seed| self.users.find_by_id(&seed.id))
                .or_else(|| self.default_user.clone()),
            LoginMissPolicy::FirstCatalogEntry => self.users.list().into_iter().next(),
        };

        tracing::info!(
            policy = %self.config.login_miss,
            fallback_user_id = fallback.as_ref().map(|u| u.id.as_str()),
            "No user with that email"
        );
        fallback
    }

    fn persist_current_user(&self) {
        let Some(user) = &self.user else {
            return;
        };
        if let Err(e) = write_slot(self.store.as_ref(), SessionSlot::CurrentUser, user) {
            tracing::warn!(error = %e, "Could not update user in session storage");
        }
    }

    fn flush_users(&self) {
        if let Err(e) = self.users.flush() {
            tracing::warn!(error = %e, "Could not persist user catalog");
        }
    }

    fn flush_swaps(&self) {
        if let Err(e) = self.swaps.flush() {
            tracing::warn!(error = %e, "Could not persist swap catalog");
        }
    }

    fn ensure_ready(&self, operation: &'static str) -> bool {
        if self.phase == SessionPhase::Ready {
            true
        } else {
            tracing::warn!(operation, "Session not hydrated, operation ignored");
            false
        }
    }

    fn require_ready(&self) -> Result<()> {
        if self.phase == SessionPhase::Ready {
            Ok(())
        } else {
            Err(SkillSwapError::internal("session context used before hydration"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_core::user::Ratings;
    use skillswap_infrastructure::MemorySessionStore;

    fn scenario_user() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "a@x.com".to_string(),
            location: None,
            profile_photo_url: None,
            skills_offered: vec!["Rust".to_string()],
            skills_wanted: vec!["Pottery".to_string()],
            availability: vec!["Evenings".to_string()],
            is_public: true,
            bio: None,
            ratings: Ratings {
                average: 4.0,
                count: 2,
            },
        }
    }

    fn mounted(store: Arc<MemorySessionStore>, config: SessionConfig) -> SessionContext {
        let seed = SeedCatalog::new(vec![scenario_user()], Vec::new());
        SessionContext::mount(store, seed, config)
    }

    #[test]
    fn test_new_context_is_uninitialized_and_ignores_operations() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let users = SlotUserRepository::hydrate(store.clone(), vec![scenario_user()]);
        let swaps = SlotSwapRepository::hydrate(store.clone(), Vec::new());
        let mut context = SessionContext::new(
            store,
            Box::new(users),
            Box::new(swaps),
            SessionConfig::default(),
            None,
        );

        assert_eq!(context.phase(), SessionPhase::Uninitialized);
        assert!(context.login(LoginRequest::existing("a@x.com")).is_none());
        assert!(context.user().is_none());

        context.hydrate();
        assert_eq!(context.phase(), SessionPhase::Ready);
        assert!(!context.is_loading());
        assert!(context.login(LoginRequest::existing("a@x.com")).is_some());
    }

    #[test]
    fn test_login_existing_user_persists_slot() {
        let store = Arc::new(MemorySessionStore::new());
        let mut context = mounted(store.clone(), SessionConfig::default());

        let user = context.login(LoginRequest::existing("a@x.com")).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(context.user().unwrap().id, "u1");

        let text = store.read(SessionSlot::CurrentUser).unwrap().unwrap();
        let persisted: UserProfile = serde_json::from_str(&text).unwrap();
        assert_eq!(persisted, scenario_user());
    }

    #[test]
    fn test_blank_name_is_a_plain_login() {
        let store = Arc::new(MemorySessionStore::new());
        let mut context = mounted(store, SessionConfig::default());

        let user = context
            .login(LoginRequest::register("a@x.com", "   "))
            .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(context.users().len(), 1);
    }

    #[test]
    fn test_login_miss_policies() {
        let seed_user = scenario_user();

        let mut ignore = mounted(Arc::new(MemorySessionStore::new()), SessionConfig::default());
        assert!(ignore.login(LoginRequest::existing("nobody@x.com")).is_none());
        assert!(ignore.user().is_none());

        let mut default_user = mounted(
            Arc::new(MemorySessionStore::new()),
            SessionConfig {
                login_miss: LoginMissPolicy::DefaultUser,
                seed_catalog: false,
                ..SessionConfig::default()
            },
        );
        // seed disabled: the catalog is empty but the default user still exists
        assert!(default_user.users().is_empty());
        assert_eq!(
            default_user
                .login(LoginRequest::existing("nobody@x.com"))
                .unwrap(),
            seed_user
        );

        let mut first_entry = mounted(
            Arc::new(MemorySessionStore::new()),
            SessionConfig {
                login_miss: LoginMissPolicy::FirstCatalogEntry,
                seed_catalog: false,
                ..SessionConfig::default()
            },
        );
        assert!(first_entry.login(LoginRequest::existing("nobody@x.com")).is_none());
        first_entry.login(LoginRequest::register("z@x.com", "Zed"));
        first_entry.logout();
        assert_eq!(
            first_entry
                .login(LoginRequest::existing("nobody@x.com"))
                .unwrap()
                .name,
            "Zed"
        );
    }

    #[test]
    fn test_logout_clears_slot_and_keeps_swaps() {
        let store = Arc::new(MemorySessionStore::new());
        let seed = SeedCatalog::builtin();
        let swap_count = seed.swaps.len();
        let mut context = SessionContext::mount(store.clone(), seed, SessionConfig::default());

        context.login(LoginRequest::existing("alice@example.com"));
        assert!(store.read(SessionSlot::CurrentUser).unwrap().is_some());

        context.logout();
        assert!(context.user().is_none());
        assert!(store.read(SessionSlot::CurrentUser).unwrap().is_none());
        assert_eq!(context.swaps().len(), swap_count);
    }

    #[test]
    fn test_update_user_writes_current_and_catalog() {
        let store = Arc::new(MemorySessionStore::new());
        let mut context = mounted(store.clone(), SessionConfig::default());
        context.login(LoginRequest::existing("a@x.com"));

        assert!(context.update_user(ProfileUpdate {
            bio: Some(Some("Systems programmer".to_string())),
            ..Default::default()
        }));

        let current = context.user().unwrap().clone();
        assert_eq!(current.bio.as_deref(), Some("Systems programmer"));
        assert_eq!(current.skills_offered, vec!["Rust".to_string()]);

        let catalog: Vec<UserProfile> =
            serde_json::from_str(&store.read(SessionSlot::UserCatalog).unwrap().unwrap()).unwrap();
        assert_eq!(catalog, vec![current.clone()]);

        let slot: UserProfile =
            serde_json::from_str(&store.read(SessionSlot::CurrentUser).unwrap().unwrap()).unwrap();
        assert_eq!(slot, current);
    }

    #[test]
    fn test_storage_failures_keep_memory_state() {
        let store = Arc::new(MemorySessionStore::new());
        let mut context = mounted(store.clone(), SessionConfig::default());
        store.set_unavailable(true);

        let user = context
            .login(LoginRequest::register("new@x.com", "Nia"))
            .unwrap();
        assert_eq!(context.user().unwrap().id, user.id);
        assert_eq!(context.users().len(), 2);

        context.logout();
        assert!(context.user().is_none());

        store.set_unavailable(false);
        assert!(store.read(SessionSlot::UserCatalog).unwrap().is_none());
    }

    #[test]
    fn test_quota_exceeded_write_is_swallowed() {
        let store = Arc::new(MemorySessionStore::with_quota(64));
        let mut context = mounted(store.clone(), SessionConfig::default());

        let user = context.login(LoginRequest::existing("a@x.com")).unwrap();
        assert_eq!(context.user(), Some(&user));
        assert!(store.read(SessionSlot::CurrentUser).unwrap().is_none());
    }

    #[test]
    fn test_update_swap_status_requires_session() {
        let store = Arc::new(MemorySessionStore::new());
        let mut context =
            SessionContext::mount(store, SeedCatalog::builtin(), SessionConfig::default());

        let err = context
            .update_swap_status("swap-1", SwapStatus::Accepted)
            .unwrap_err();
        assert_eq!(err, SkillSwapError::NoActiveSession);

        context.login(LoginRequest::existing("alice@example.com"));
        let err = context
            .update_swap_status("swap-404", SwapStatus::Accepted)
            .unwrap_err();
        assert!(err.is_not_found());

        let swap = context
            .update_swap_status("swap-1", SwapStatus::Accepted)
            .unwrap();
        assert_eq!(swap.status, SwapStatus::Accepted);
        assert_eq!(
            context
                .swaps()
                .iter()
                .find(|s| s.id == "swap-1")
                .unwrap()
                .status,
            SwapStatus::Accepted
        );
    }
}
