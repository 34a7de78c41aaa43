//! lore-tui - Terminal UI for Lore Agent
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from lore-app and adds terminal rendering, event polling, and the
//! panel widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
