//! Locally persisted settings.
//!
//! Settings live in a single JSON file, loaded once at startup and
//! overwritten wholesale on save; there is no partial update.

use std::{fs, io, path::Path};

use clap::ValueEnum;
use rust_decimal::{Decimal, dec};
use rusty_money::iso;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or saving the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error("could not access settings file")]
    Io(#[from] io::Error),

    /// The settings file exists but is not valid JSON.
    #[error("settings file is malformed")]
    Parse(#[from] serde_json::Error),
}

/// Display currency for monetary values.
///
/// Unknown values in a stored settings file fall back to the default (EUR)
/// rather than failing the load.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro (€).
    #[default]
    Eur,
    /// US dollar ($).
    Usd,
    /// Pound sterling (£).
    Gbp,
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        Ok(match raw.as_str() {
            "USD" => Self::Usd,
            "GBP" => Self::Gbp,
            _ => Self::Eur,
        })
    }
}

impl Currency {
    /// The ISO currency definition backing this display currency.
    #[must_use]
    pub fn iso(self) -> &'static iso::Currency {
        match self {
            Self::Eur => iso::EUR,
            Self::Usd => iso::USD,
            Self::Gbp => iso::GBP,
        }
    }

    /// Display symbol for table output.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        self.iso().symbol
    }
}

/// Application settings, persisted as camelCase JSON.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Storefront shop name.
    pub etsy_shop: String,
    /// Supplier shop name.
    pub ali_shop: String,
    /// Display currency for all monetary values.
    pub currency: Currency,
    /// Target margin percentage used as a reference point.
    pub target_margin: Decimal,
    /// URL of the spreadsheet sync endpoint; blank means not configured.
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            etsy_shop: String::new(),
            ali_shop: String::new(),
            currency: Currency::default(),
            target_margin: dec!(30),
            api_url: String::new(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(error.into()),
        }
    }

    /// Writes settings to `path`, overwriting any previous content and
    /// creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;

        Ok(())
    }

    /// Whether a sync endpoint has been configured.
    #[must_use]
    pub fn has_endpoint(&self) -> bool {
        !self.api_url.trim().is_empty()
    }
}
