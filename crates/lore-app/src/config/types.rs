//! Configuration types for Lore Agent
//!
//! Defines `Settings` and its sections. Every field has a default so a
//! partial (or missing) config file is always valid.

use lore_core::catalog;
use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub wallet: WalletSettings,

    #[serde(default)]
    pub feedback: FeedbackSettings,

    #[serde(default)]
    pub links: LinkSettings,
}

/// Agent console settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConsoleSettings {
    /// Delay before the synthetic reply lands, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Seed for the cosmetic random fillers. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            seed: None,
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1500
}

/// Simulated wallet settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WalletSettings {
    /// Delay of the simulated connect, in milliseconds
    #[serde(default = "default_connect_delay_ms")]
    pub connect_delay_ms: u64,

    /// Displayed SOL balance
    #[serde(default = "default_balance")]
    pub balance: String,
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self {
            connect_delay_ms: default_connect_delay_ms(),
            balance: default_balance(),
        }
    }
}

fn default_connect_delay_ms() -> u64 {
    800
}

fn default_balance() -> String {
    catalog::WALLET_BALANCE.to_string()
}

/// Interaction feedback settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedbackSettings {
    /// Ring the terminal bell on interactions
    #[serde(default = "default_true")]
    pub bell: bool,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self { bell: true }
    }
}

fn default_true() -> bool {
    true
}

/// Outbound link settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinkSettings {
    /// Social profile opened from the header/footer
    #[serde(default = "default_social_url")]
    pub social_url: String,

    /// Browser command. Empty uses the platform default opener.
    #[serde(default)]
    pub browser: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            social_url: default_social_url(),
            browser: String::new(),
        }
    }
}

fn default_social_url() -> String {
    catalog::SOCIAL_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let settings = Settings::default();
        assert_eq!(settings.console.reply_delay_ms, 1500);
        assert_eq!(settings.console.seed, None);
        assert_eq!(settings.wallet.connect_delay_ms, 800);
        assert_eq!(settings.wallet.balance, "45.32");
        assert!(settings.feedback.bell);
        assert_eq!(settings.links.social_url, "https://x.com/elonmusk");
        assert!(settings.links.browser.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[console]
seed = 7
"#,
        )
        .unwrap();
        assert_eq!(settings.console.seed, Some(7));
        assert_eq!(settings.console.reply_delay_ms, 1500);
        assert!(settings.feedback.bell);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
