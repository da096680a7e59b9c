use anyhow::{Context, Result};
use skillswap_application::SessionContext;
use skillswap_core::session::LoginRequest;

use super::print_profile;

pub fn login(session: &mut SessionContext, email: String, name: Option<String>) -> Result<()> {
    let request = LoginRequest { email, name };
    let registering = request.is_registration();

    match session.login(request) {
        Some(user) if registering => {
            println!("✓ Welcome to SkillSwap, {}!", user.first_name());
            println!("  Your user id is {}", user.id);
            Ok(())
        }
        Some(user) => {
            println!("✓ Logged in as {}", user.name);
            Ok(())
        }
        None => anyhow::bail!(
            "No user with that email. Pass --name to create a new account."
        ),
    }
}

pub fn logout(session: &mut SessionContext) {
    if !session.is_authenticated() {
        println!("Not logged in");
        return;
    }

    let name = session.user().map(|u| u.name.clone()).unwrap_or_default();
    session.logout();
    println!("✓ Logged out {}", name);
}

pub fn whoami(session: &SessionContext) {
    match session.user() {
        Some(user) => print_profile(user),
        None => println!("Not logged in"),
    }
}

pub fn status(session: &SessionContext) -> Result<()> {
    let json = serde_json::to_string_pretty(&session.snapshot())
        .context("Failed to serialize session snapshot")?;
    println!("{}", json);
    Ok(())
}
