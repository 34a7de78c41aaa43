//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn, Level};

use lore_core::{Error, Result};

use crate::console::ReplyTicket;
use crate::message::Message;
use crate::UpdateAction;

pub mod cue;
pub mod opener;

/// Cancellation tokens of the reply tasks still sleeping, by ticket
#[derive(Debug, Clone, Default)]
pub struct ReplyTasks {
    inner: Arc<Mutex<HashMap<ReplyTicket, CancellationToken>>>,
}

impl ReplyTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic while holding the lock leaves the map intact, so keep using it
    fn lock(&self) -> MutexGuard<'_, HashMap<ReplyTicket, CancellationToken>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, ticket: ReplyTicket) -> CancellationToken {
        let token = CancellationToken::new();
        self.lock().insert(ticket, token.clone());
        token
    }

    fn remove(&self, ticket: ReplyTicket) -> Option<CancellationToken> {
        self.lock().remove(&ticket)
    }

    /// Cancel the task for `ticket`. Returns false if it already finished.
    pub fn cancel(&self, ticket: ReplyTicket) -> bool {
        match self.remove(ticket) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancel every outstanding task
    pub fn cancel_all(&self) {
        for (_, token) in self.lock().drain() {
            token.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Execute an action, spawning a background task where it sleeps
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, replies: &ReplyTasks) {
    match action {
        UpdateAction::ScheduleReply { ticket, delay } => {
            spawn_reply(ticket, delay, msg_tx, replies.clone());
        }

        UpdateAction::CancelReply { ticket } => {
            if !replies.cancel(ticket) {
                debug!("Reply #{} already finished, nothing to cancel", ticket);
            }
        }

        UpdateAction::ConnectWallet { delay } => {
            spawn_wallet_connect(delay, msg_tx);
        }

        UpdateAction::PlayCue => report(cue::ring(&mut std::io::stdout())),

        UpdateAction::OpenUrl { url, browser } => report(opener::open_url(&url, &browser)),
    }
}

/// Log level for a failed side effect
fn severity(e: &Error) -> Level {
    if e.is_recoverable() {
        Level::WARN
    } else {
        Level::ERROR
    }
}

/// Side effects never stop the app; failures are only logged
fn report(result: Result<()>) {
    let Err(e) = result else {
        return;
    };
    if severity(&e) == Level::WARN {
        warn!("{}", e);
    } else {
        error!("{}", e);
    }
}

/// Sleep for `delay` then report the reply as due, unless cancelled first
fn spawn_reply(
    ticket: ReplyTicket,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
    replies: ReplyTasks,
) {
    let token = replies.insert(ticket);

    tokio::spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {
                debug!("Reply #{} cancelled", ticket);
            }
            _ = tokio::time::sleep(delay) => {
                replies.remove(ticket);
                if msg_tx.send(Message::ReplyDue { ticket }).await.is_err() {
                    warn!("Reply #{} finished after the engine shut down", ticket);
                }
            }
        }
    });
}

/// Simulated wallet connection: no failure path, not cancellable
fn spawn_wallet_connect(delay: Duration, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = msg_tx.send(Message::WalletConnected).await {
            warn!("{}", Error::channel_send(e.to_string()));
        }
    });
}
