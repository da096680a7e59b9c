use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillswap_core::swap::SwapStatus;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "skillswap")]
#[command(about = "SkillSwap - trade skills with your community", long_about = None)]
struct Cli {
    /// Directory holding config.toml and the session files
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in by email, or register when a name is given
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List public profiles
    Browse {
        /// Only profiles offering or wanting a matching skill
        #[arg(long)]
        skill: Option<String>,
    },
    /// Show one public profile
    ShowUser { id: String },
    /// Edit the logged-in user's profile
    EditProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        /// Comma-separated skills, e.g. "React, Photography"
        #[arg(long)]
        offers: Option<String>,
        /// Comma-separated skills
        #[arg(long)]
        wants: Option<String>,
    },
    /// Ask another user for a skill swap
    RequestSwap {
        /// Receiver's user id
        #[arg(long)]
        to: String,
        #[arg(long)]
        offer: String,
        #[arg(long)]
        want: String,
        #[arg(long)]
        message: Option<String>,
    },
    /// List swap requests (incoming by default)
    Swaps {
        #[arg(long)]
        outgoing: bool,
    },
    /// Accept an incoming swap request
    Accept { swap_id: String },
    /// Reject an incoming swap request
    Reject { swap_id: String },
    /// Cancel a swap
    Cancel { swap_id: String },
    /// Mark an accepted swap as completed
    Complete { swap_id: String },
    /// Print the session snapshot as JSON
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = commands::load_config(cli.state_dir.as_deref())?;
    logging::init(&config.logging);

    let mut session = commands::open_session(cli.state_dir.as_deref(), &config)?;

    match cli.command {
        Commands::Login { email, name } => commands::session::login(&mut session, email, name)?,
        Commands::Logout => commands::session::logout(&mut session),
        Commands::Whoami => commands::session::whoami(&session),
        Commands::Browse { skill } => commands::browse::list(&session, skill.as_deref()),
        Commands::ShowUser { id } => commands::browse::show(&session, &id)?,
        Commands::EditProfile {
            name,
            bio,
            offers,
            wants,
        } => commands::profile::edit(&mut session, name, bio, offers, wants)?,
        Commands::RequestSwap {
            to,
            offer,
            want,
            message,
        } => commands::swaps::request(&mut session, &to, offer, want, message)?,
        Commands::Swaps { outgoing } => commands::swaps::list(&session, outgoing)?,
        Commands::Accept { swap_id } => {
            commands::swaps::respond(&mut session, &swap_id, SwapStatus::Accepted)?
        }
        Commands::Reject { swap_id } => {
            commands::swaps::respond(&mut session, &swap_id, SwapStatus::Rejected)?
        }
        Commands::Cancel { swap_id } => {
            commands::swaps::respond(&mut session, &swap_id, SwapStatus::Cancelled)?
        }
        Commands::Complete { swap_id } => {
            commands::swaps::respond(&mut session, &swap_id, SwapStatus::Completed)?
        }
        Commands::Status => commands::session::status(&session)?,
    }

    Ok(())
}
