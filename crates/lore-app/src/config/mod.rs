//! Configuration file parsing for Lore Agent
//!
//! Supports `<config_dir>/lore-agent/config.toml` or an explicit file.

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings, load_settings_file};
pub use types::*;
