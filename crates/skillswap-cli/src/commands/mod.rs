pub mod browse;
pub mod profile;
pub mod session;
pub mod swaps;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use skillswap_application::SessionContext;
use skillswap_core::config::{AppConfig, StorageBackend};
use skillswap_core::session::SessionStore;
use skillswap_core::user::UserProfile;
use skillswap_infrastructure::paths::SkillSwapPaths;
use skillswap_infrastructure::{ConfigService, FileSessionStore, MemorySessionStore, SeedCatalog};

/// Reads `config.toml`, falling back to defaults when it does not exist.
pub fn load_config(state_dir: Option<&Path>) -> Result<AppConfig> {
    let paths = SkillSwapPaths::new(state_dir.map(Path::to_path_buf));
    let service = ConfigService::new(&paths).context("Failed to resolve config path")?;
    service
        .get_config()
        .with_context(|| format!("Failed to load {}", service.path().display()))
}

/// Builds the configured store and hydrates a session over it.
///
/// `--state-dir` takes precedence over `storage.dir`.
pub fn open_session(state_dir: Option<&Path>, config: &AppConfig) -> Result<SessionContext> {
    let store: Arc<dyn SessionStore> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory session store, nothing will be kept");
            Arc::new(MemorySessionStore::new())
        }
        StorageBackend::File => {
            let dir = match (state_dir, &config.storage.dir) {
                (None, Some(dir)) => dir.clone(),
                _ => SkillSwapPaths::new(state_dir.map(Path::to_path_buf))
                    .session_dir()
                    .context("Failed to resolve session directory")?,
            };
            let store = FileSessionStore::new(dir);
            tracing::debug!(dir = %store.dir().display(), "Using file session store");
            Arc::new(store)
        }
    };

    Ok(SessionContext::mount(
        store,
        SeedCatalog::builtin(),
        config.session.clone(),
    ))
}

/// The logged-in user, or an error telling how to log in.
pub fn require_user(session: &SessionContext) -> Result<&UserProfile> {
    if !session.is_authenticated() {
        anyhow::bail!("Not logged in. Run `skillswap login --email <EMAIL>` first.");
    }
    session.user().context("Session has no current user")
}

pub fn print_profile(user: &UserProfile) {
    println!("{} ({})", user.name, user.id);
    println!("  Email:        {}", user.email);
    if let Some(location) = &user.location {
        println!("  Location:     {}", location);
    }
    println!(
        "  Rating:       {:.1} ({} reviews)",
        user.ratings.average, user.ratings.count
    );
    println!("  Visibility:   {}", if user.is_public { "public" } else { "private" });
    println!("  Offers:       {}", join_or_dash(&user.skills_offered));
    println!("  Wants:        {}", join_or_dash(&user.skills_wanted));
    println!("  Availability: {}", join_or_dash(&user.availability));
    if let Some(bio) = &user.bio {
        println!("  Bio:          {}", bio);
    }
}

pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
