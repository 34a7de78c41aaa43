//! Lore Agent - terminal mock-up of a Solana AI agent
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use lore_app::config::{self, Settings};

/// Lore Agent - an AI agent for Solana, in your terminal
#[derive(Parser, Debug)]
#[command(name = "lore")]
#[command(about = "A terminal mock-up of the Lore Agent Solana assistant", long_about = None)]
struct Args {
    /// Explicit config file (must exist and parse)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the reply generator, for reproducible transcripts
    #[arg(long)]
    seed: Option<u64>,

    /// Delay before the agent replies, in milliseconds
    #[arg(long, value_name = "MS")]
    reply_delay_ms: Option<u64>,

    /// Run in headless mode (commands on stdin, JSON events on stdout)
    #[arg(long)]
    headless: bool,

    /// Write a default config file to the config directory and exit
    #[arg(long, conflicts_with = "config")]
    init_config: bool,
}

impl Args {
    fn settings(&self) -> lore_core::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => config::load_settings_file(path)?,
            None => config::load_settings(&config::default_config_dir()),
        };

        if let Some(seed) = self.seed {
            settings.console.seed = Some(seed);
        }
        if let Some(delay) = self.reply_delay_ms {
            settings.console.reply_delay_ms = delay;
        }
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    lore_core::logging::init()?;

    if args.init_config {
        let dir = config::default_config_dir();
        config::init_config_dir(&dir)?;
        eprintln!("Config written to {}", dir.join("config.toml").display());
        return Ok(());
    }

    let settings = log_if_fatal(args.settings())?;

    let result = if args.headless {
        lore_agent::run_headless(settings).await
    } else {
        lore_agent::run(settings).await
    };
    log_if_fatal(result)?;

    Ok(())
}

/// Record errors that end the process in the log file before color-eyre
/// reports them on stderr
fn log_if_fatal<T>(result: lore_core::Result<T>) -> lore_core::Result<T> {
    if let Err(e) = &result {
        if e.is_fatal() {
            tracing::error!("Fatal: {}", e);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file_values() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[console]\nreply_delay_ms = 900\nseed = 1\n").unwrap();

        let args = Args::parse_from([
            "lore",
            "--config",
            path.to_str().unwrap(),
            "--seed",
            "99",
        ]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.console.seed, Some(99));
        assert_eq!(settings.console.reply_delay_ms, 900);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let args = Args::parse_from(["lore", "--config", "/nonexistent/lore.toml"]);
        assert!(args.settings().is_err());
    }

    #[test]
    fn test_fatal_errors_pass_through() {
        let missing = Args::parse_from(["lore", "--config", "/nonexistent/lore.toml"]).settings();
        let err = log_if_fatal(missing).unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, lore_core::Error::ConfigNotFound { .. }));

        assert_eq!(log_if_fatal(Ok::<_, lore_core::Error>(3)).unwrap(), 3);
    }

    #[test]
    fn test_init_config_conflicts_with_config() {
        let parsed = Args::try_parse_from(["lore", "--init-config", "--config", "x.toml"]);
        assert!(parsed.is_err());
    }
}
