//! `flipkit config` — show or change local settings.

use std::path::Path;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::settings::{Currency, Settings};

/// Settings subcommands.
#[derive(Debug, Args)]
pub(crate) struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Print the current settings
    Show,
    /// Change one or more settings and save the file
    Set(SetArgs),
}

/// Fields to change; unset flags keep their current value.
#[derive(Debug, Args)]
struct SetArgs {
    /// Storefront shop name
    #[arg(long)]
    etsy_shop: Option<String>,

    /// Supplier shop name
    #[arg(long)]
    ali_shop: Option<String>,

    /// Display currency
    #[arg(long, value_enum)]
    currency: Option<Currency>,

    /// Target margin percentage
    #[arg(long)]
    target_margin: Option<Decimal>,

    /// Spreadsheet sync endpoint URL
    #[arg(long)]
    api_url: Option<String>,
}

pub(crate) fn run(settings_path: &Path, command: ConfigCommand) -> Result<(), String> {
    match command.command {
        ConfigSubcommand::Show => show(settings_path),
        ConfigSubcommand::Set(args) => set(settings_path, args),
    }
}

fn show(settings_path: &Path) -> Result<(), String> {
    let settings = load(settings_path)?;

    println!("etsy_shop: {}", settings.etsy_shop);
    println!("ali_shop: {}", settings.ali_shop);
    println!("currency: {}", settings.currency.symbol());
    println!("target_margin: {}%", settings.target_margin);
    println!("api_url: {}", settings.api_url);

    Ok(())
}

fn set(settings_path: &Path, args: SetArgs) -> Result<(), String> {
    let mut settings = load(settings_path)?;

    if let Some(etsy_shop) = args.etsy_shop {
        settings.etsy_shop = etsy_shop;
    }
    if let Some(ali_shop) = args.ali_shop {
        settings.ali_shop = ali_shop;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(target_margin) = args.target_margin {
        settings.target_margin = target_margin;
    }
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }

    settings
        .save(settings_path)
        .map_err(|error| format!("failed to save settings: {error}"))?;

    println!("settings saved");

    Ok(())
}

fn load(settings_path: &Path) -> Result<Settings, String> {
    Settings::load(settings_path).map_err(|error| format!("failed to load settings: {error}"))
}
