//! lore-app - Application state and orchestration for Lore Agent
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`Message`]s go through [`handler::update`], which mutates
//! [`AppState`] and may return an [`UpdateAction`]. The [`Engine`] dispatches
//! actions as background tasks whose results come back as messages.
//!
//! The agent console and its synthetic replies live in [`console`] and
//! [`responder`]; configuration loading lives in [`config`].

pub mod actions;
pub mod config;
pub mod console;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod responder;
pub mod signals;
pub mod state;

// Re-export primary types
pub use console::{ConsoleState, ReplyTicket};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, SessionState};
