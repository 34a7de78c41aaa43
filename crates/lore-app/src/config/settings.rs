//! Settings parser for `config.toml`
//!
//! The default location is `<config_dir>/lore-agent/config.toml`. A missing or
//! broken default file falls back to defaults; an explicitly requested file
//! must exist and parse.

use super::types::Settings;
use lore_core::{catalog, prelude::*};
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "lore-agent";

/// Directory holding `config.toml` for the current user
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load settings from `dir/config.toml`, falling back to defaults on any problem
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                sanitize(settings)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load an explicitly requested settings file. Unlike [`load_settings`],
/// a missing or invalid file is an error.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str::<Settings>(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded settings from {}", path.display());
    Ok(sanitize(settings))
}

/// Replace values that would misbehave at runtime with their defaults
fn sanitize(mut settings: Settings) -> Settings {
    if !is_web_url(&settings.links.social_url) {
        warn!(
            "Ignoring invalid social_url {:?}, using {}",
            settings.links.social_url,
            catalog::SOCIAL_URL
        );
        settings.links.social_url = catalog::SOCIAL_URL.to_string();
    }

    if settings.wallet.balance.trim().parse::<f64>().is_err() {
        warn!(
            "Ignoring non-numeric wallet balance {:?}, using {}",
            settings.wallet.balance,
            catalog::WALLET_BALANCE
        );
        settings.wallet.balance = catalog::WALLET_BALANCE.to_string();
    }

    settings
}

/// Only absolute http(s) links are handed to the opener
fn is_web_url(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false)
}

/// Create the config directory with a commented default `config.toml`
pub fn init_config_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Lore Agent Configuration

[console]
# Delay before the agent reply lands (ms)
reply_delay_ms = 1500
# Fixed seed for reproducible replies (omit for random)
# seed = 42

[wallet]
connect_delay_ms = 800
balance = "45.32"

[feedback]
# Ring the terminal bell on interactions
bell = true

[links]
social_url = "https://x.com/elonmusk"
# Browser command, empty = system default
browser = ""
"#;
        std::fs::write(&config_path, default_content)?;
        info!("Created default config at {}", config_path.display());
    }

    Ok(())
}
