//! `flipkit stats` — fetch orders and display aggregate statistics.

use std::path::Path;

use clap::Args;

use crate::render;

/// Arguments for the statistics view.
#[derive(Debug, Args)]
pub(crate) struct StatsArgs {}

pub(crate) async fn run(settings_path: &Path, _args: StatsArgs) -> Result<(), String> {
    let mut tracker = super::load_tracker(settings_path)?;
    let currency = tracker.settings().currency;

    tracker
        .refresh()
        .await
        .map_err(|error| format!("failed to fetch orders: {error}"))?;

    println!("{}", render::stats_table(&tracker.stats(), currency));

    Ok(())
}
