//! Flipkit CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    settings::Settings,
    sync::HttpSheetClient,
    tracker::Tracker,
};

mod add;
mod config;
mod list;
mod stats;

/// Command-line interface for the order tracker.
#[derive(Debug, Parser)]
#[command(name = "flipkit", about = "Reseller order tracker", long_about = None)]
pub struct Cli {
    /// Settings file path
    #[arg(long, env = "FLIPKIT_SETTINGS", default_value = "flipkit.json", global = true)]
    settings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Record a new order and submit it to the remote sheet
    Add(add::AddArgs),
    /// Fetch and display the order list, optionally filtered
    List(list::ListArgs),
    /// Fetch the order list and display aggregate statistics
    Stats(stats::StatsArgs),
    /// Show or change local settings
    Config(config::ConfigCommand),
}

impl Cli {
    /// Runs the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the command fails.
    pub async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Add(args) => add::run(&self.settings, args).await,
            Commands::List(args) => list::run(&self.settings, args).await,
            Commands::Stats(args) => stats::run(&self.settings, args).await,
            Commands::Config(command) => config::run(&self.settings, command),
        }
    }
}

/// Loads settings and builds a tracker backed by the HTTP sheet client.
fn load_tracker(settings_path: &std::path::Path) -> Result<Tracker, String> {
    let settings = Settings::load(settings_path)
        .map_err(|error| format!("failed to load settings: {error}"))?;
    let client = HttpSheetClient::new(settings.api_url.clone());

    Ok(Tracker::new(settings, Box::new(client)))
}
