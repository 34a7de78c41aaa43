//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the console and navigation
//! - `console`: Agent console handlers (submit, reply, reset)

pub(crate) mod console;
pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use crate::console::ReplyTicket;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Sleep for `delay`, then send `Message::ReplyDue { ticket }`
    ScheduleReply { ticket: ReplyTicket, delay: Duration },

    /// Cancel the sleeping reply task for `ticket`, if any
    CancelReply { ticket: ReplyTicket },

    /// Sleep for `delay`, then send `Message::WalletConnected`
    ConnectWallet { delay: Duration },

    /// Ring the interaction feedback cue
    PlayCue,

    /// Open `url` in a browser. Empty `browser` means the platform opener.
    OpenUrl { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Perform `action` and play the feedback cue afterwards
    pub fn action_with_cue(action: UpdateAction) -> Self {
        Self {
            message: Some(Message::PlayCue),
            action: Some(action),
        }
    }

    /// Only play the feedback cue
    pub fn cue() -> Self {
        Self::message(Message::PlayCue)
    }
}
