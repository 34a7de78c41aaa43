//! Lore Agent Library
//!
//! A terminal mock-up of the Lore Agent Solana assistant. The TUI lives in
//! `lore-tui`; this crate adds the scripted headless mode used for testing.

pub mod headless;

pub use headless::run_headless;
pub use lore_tui::run;
