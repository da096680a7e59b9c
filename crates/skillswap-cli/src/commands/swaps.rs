use anyhow::Result;
use skillswap_application::{SessionContext, SwapInbox, SwapRequestDraft};
use skillswap_core::swap::SwapStatus;

use super::require_user;

pub fn request(
    session: &mut SessionContext,
    receiver_id: &str,
    offer: String,
    want: String,
    message: Option<String>,
) -> Result<()> {
    let mut draft = SwapRequestDraft::new(offer, want);
    if let Some(message) = message {
        draft = draft.with_message(message);
    }

    let swap = session.request_swap(receiver_id, draft)?;
    println!("✓ Swap request sent to {}", swap.receiver_name);
    println!("  {} for {}  (id {})", swap.offered_skill, swap.requested_skill, swap.id);
    Ok(())
}

pub fn list(session: &SessionContext, outgoing: bool) -> Result<()> {
    let user_id = require_user(session)?.id.clone();
    let swaps = session.swaps();
    let inbox = SwapInbox::for_user(&swaps, &user_id);
    let (incoming_count, outgoing_count) = inbox.counts();

    println!("Incoming ({})  Outgoing ({})", incoming_count, outgoing_count);
    println!();

    let entries = if outgoing { &inbox.outgoing } else { &inbox.incoming };
    if entries.is_empty() {
        println!(
            "No {} requests",
            if outgoing { "outgoing" } else { "incoming" }
        );
        return Ok(());
    }

    for entry in entries {
        let swap = entry.swap;
        let (gives, gets) = if outgoing {
            (&swap.offered_skill, &swap.requested_skill)
        } else {
            (&swap.requested_skill, &swap.offered_skill)
        };
        println!("{}  [{}]  {}", swap.id, swap.status, entry.counterpart_name);
        println!("     you give {}, you get {}", gives, gets);
        if let Some(message) = &swap.message {
            println!("     \"{}\"", message);
        }
        println!("     {}", swap.created_at.format("%Y-%m-%d %H:%M"));

        let actions: Vec<String> = entry
            .available_actions()
            .iter()
            .map(|status| action_name(*status).to_string())
            .collect();
        if !actions.is_empty() {
            println!("     actions: {}", actions.join(", "));
        }
    }
    Ok(())
}

pub fn respond(session: &mut SessionContext, swap_id: &str, status: SwapStatus) -> Result<()> {
    let swap = session.update_swap_status(swap_id, status)?;
    println!("✓ Swap {} is now {}", swap.id, swap.status);
    Ok(())
}

fn action_name(status: SwapStatus) -> &'static str {
    match status {
        SwapStatus::Accepted => "accept",
        SwapStatus::Rejected => "reject",
        SwapStatus::Cancelled => "cancel",
        SwapStatus::Completed => "complete",
        SwapStatus::Pending => "pending",
    }
}
