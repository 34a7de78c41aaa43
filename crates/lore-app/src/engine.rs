//! Engine - shared orchestration state for the TUI and headless runners
//!
//! Owns the TEA state, the message channel and the outstanding reply tasks.
//! Both frontends feed it messages and read state back out of it.

use tokio::sync::mpsc;
use tracing::debug;

use crate::actions::ReplyTasks;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::state::AppState;

/// Capacity of the unified message channel
pub const CHANNEL_CAPACITY: usize = 256;

pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this for input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Reply tasks still sleeping
    pub replies: ReplyTasks,
}

impl Engine {
    /// Create an engine for `settings`. Spawns nothing.
    pub fn new(settings: Settings) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            replies: ReplyTasks::new(),
        }
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.replies);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task and process it.
    /// Returns false if the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Cancel every reply that is still sleeping
    pub fn shutdown(&mut self) {
        debug!("Engine shutdown, cancelling {} pending replies", self.replies.len());
        self.replies.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use lore_core::{AgentStatus, LineKind};

    fn fast_settings() -> Settings {
        let mut settings = Settings::default();
        settings.console.seed = Some(1);
        settings.console.reply_delay_ms = 1500;
        settings.feedback.bell = false;
        settings
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_lands_after_delay() {
        let mut engine = Engine::new(fast_settings());
        let before = engine.state.console.lines.len();

        engine.process_message(Message::SubmitCommand("Swap 2 SOL for USDC".into()));
        assert_eq!(engine.state.console.lines.len(), before + 1);
        assert_eq!(engine.state.console.status, AgentStatus::Processing);

        assert!(engine.process_next().await);

        assert_eq!(engine.state.console.lines.len(), before + 2);
        let reply = engine.state.console.lines.last().unwrap();
        assert_eq!(reply.kind, LineKind::Agent);
        assert!(reply.text.contains("Transaction ID: SOL"));
        assert_eq!(engine.state.console.status, AgentStatus::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_in_flight_reply() {
        let mut engine = Engine::new(fast_settings());
        engine.process_message(Message::SubmitCommand("stake".into()));
        assert_eq!(engine.replies.len(), 1);

        engine.process_message(Message::ResetConsole);
        assert!(engine.replies.is_empty());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(engine.drain_pending_messages(), 0);
        assert_eq!(engine.state.console.lines.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wallet_connects_through_channel() {
        let mut engine = Engine::new(fast_settings());
        engine.process_message(Message::ConnectWallet);
        assert!(engine.state.session.loading);

        assert!(engine.process_next().await);

        assert!(engine.state.session.connected);
        assert!(!engine.state.session.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_outstanding_replies() {
        let mut engine = Engine::new(fast_settings());
        engine.process_message(Message::SubmitCommand("hello".into()));

        engine.shutdown();

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(engine.drain_pending_messages(), 0);
        assert!(engine.state.console.is_pending());
    }
}
