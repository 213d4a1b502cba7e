use crate::config::Overrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "curate")]
#[command(about = "Command-line client for the article curation site")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, short = 'u', global = true)]
    pub username: Option<String>,

    #[arg(long, short = 'P', global = true)]
    pub password: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create an account with one to three preferences
    Signup {
        #[arg(long = "preference", short = 'p', help = "Preference name or id, repeatable")]
        preferences: Vec<String>,
    },
    /// Check the account credentials
    Login,
    /// Show the current preferences, or replace them when any are given
    Preferences {
        #[arg(long = "preference", short = 'p')]
        preferences: Vec<String>,
    },
    /// Fetch articles for the account's preferences
    Feed {
        #[arg(long, help = "Print the rendered cards")]
        html: bool,
    },
    /// Fetch the feed and save the article at a 1-based position
    Save { position: usize },
    /// List saved articles
    Saved {
        #[arg(long, help = "Print the rendered cards")]
        html: bool,
    },
    /// Delete a saved article by URL
    Delete { url: String },
    /// End the session
    Logout,
}

impl Command {
    pub fn wants_html(&self) -> bool {
        matches!(self, Command::Feed { html: true } | Command::Saved { html: true })
    }

    /// The page a browser would be on when issuing this command.
    pub fn start_path(&self) -> &'static str {
        match self {
            Command::Signup { .. } => "/signup",
            _ => "/login",
        }
    }
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            verbose: self.verbose,
        }
    }
}
