use anyhow::Result;
use skillswap_application::SessionContext;
use skillswap_application::browse::{self, ProfileCard};

use super::print_profile;

pub fn list(session: &SessionContext, skill: Option<&str>) {
    let users = session.users();
    let matches = match skill {
        Some(query) => browse::search_by_skill(&users, query),
        None => browse::public_profiles(&users),
    };

    if matches.is_empty() {
        println!("No profiles found");
        return;
    }

    for user in matches {
        let card = ProfileCard::from(user);
        println!("[{}] {} ({})  {}", card.initials, card.name, card.id, card.rating_label);
        if let Some(location) = &card.location {
            println!("     {}", location);
        }
        println!("     offers: {}", card.top_offered.join(", "));
        println!("     wants:  {}", card.top_wanted.join(", "));
    }
}

pub fn show(session: &SessionContext, id: &str) -> Result<()> {
    let users = session.users();
    let user = browse::find_public_profile(&users, id)?;
    print_profile(user);
    Ok(())
}
