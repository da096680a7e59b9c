use anyhow::Result;
use skillswap_application::SessionContext;
use skillswap_application::profile_edit::ProfileEditForm;

use super::{join_or_dash, require_user};

pub fn edit(
    session: &mut SessionContext,
    name: Option<String>,
    bio: Option<String>,
    offers: Option<String>,
    wants: Option<String>,
) -> Result<()> {
    if name.is_none() && bio.is_none() && offers.is_none() && wants.is_none() {
        anyhow::bail!("Nothing to change. Pass --name, --bio, --offers or --wants.");
    }

    // fields left out keep what the form was prefilled with
    let mut form = ProfileEditForm::from_user(require_user(session)?);
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(bio) = bio {
        form.bio = bio;
    }
    if let Some(offers) = offers {
        form.skills_offered = offers;
    }
    if let Some(wants) = wants {
        form.skills_wanted = wants;
    }

    if !session.update_user(form.into_update()) {
        anyhow::bail!("Profile was not updated");
    }

    let user = require_user(session)?;
    println!("✓ Profile updated");
    println!("  Offers: {}", join_or_dash(&user.skills_offered));
    println!("  Wants:  {}", join_or_dash(&user.skills_wanted));
    Ok(())
}
