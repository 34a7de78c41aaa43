//! Agent console transcript and the pending-reply bookkeeping
//!
//! The console is append-only between resets. A submission is accepted only
//! when the trimmed text is non-empty and no reply is pending; an accepted
//! submission gets a [`ReplyTicket`] that the delayed reply must present to
//! land.

use lore_core::{catalog, AgentStatus, ConsoleLine};

/// Identifies one scheduled reply
pub type ReplyTicket = u64;

/// Transcript shown when the app starts
pub const INITIAL_SEED: [&str; 3] = [
    "// Agent console initialized",
    "// Ready to accept commands",
    "// Type your instruction below",
];

/// Transcript shown after an explicit reset
pub const RESET_SEED: [&str; 3] = [
    "// Agent console reset",
    "// Ready to accept commands",
    "// Type your instruction below",
];

/// A submission waiting for its synthetic reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ConsoleState {
    /// Ordered transcript
    pub lines: Vec<ConsoleLine>,

    /// Text currently typed in the command input
    pub input: String,

    pub status: AgentStatus,

    /// Highlighted entry of [`catalog::EXAMPLE_COMMANDS`]
    pub selected_example: usize,

    pending: Option<PendingReply>,
    next_ticket: ReplyTicket,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            lines: seed_lines(&INITIAL_SEED),
            input: String::new(),
            status: AgentStatus::Ready,
            selected_example: 0,
            pending: None,
            next_ticket: 1,
        }
    }

    /// Accept `text` as a user line and open a pending reply.
    ///
    /// Returns `None` without touching the transcript when the text is blank
    /// or a reply is already pending.
    pub fn submit(&mut self, text: &str) -> Option<ReplyTicket> {
        if text.trim().is_empty() || self.pending.is_some() {
            return None;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        self.lines.push(ConsoleLine::user(text));
        self.status = AgentStatus::Processing;
        self.pending = Some(PendingReply {
            ticket,
            text: text.to_string(),
        });

        Some(ticket)
    }

    pub fn pending(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Claim the pending submission if `ticket` is the one waiting.
    /// Stale tickets return `None` and leave the state untouched.
    pub fn take_due(&mut self, ticket: ReplyTicket) -> Option<String> {
        match &self.pending {
            Some(p) if p.ticket == ticket => self.pending.take().map(|p| p.text),
            _ => None,
        }
    }

    /// Append the agent reply and return to `Ready`
    pub fn complete(&mut self, reply: impl Into<String>) {
        self.lines.push(ConsoleLine::agent(reply));
        self.status = AgentStatus::Ready;
        self.input.clear();
    }

    /// Restore the reset seed, clear the input and drop any pending reply.
    ///
    /// Returns the ticket of the reply that was dropped, so its task can be
    /// cancelled.
    pub fn reset(&mut self) -> Option<ReplyTicket> {
        self.lines = seed_lines(&RESET_SEED);
        self.input.clear();
        self.status = AgentStatus::Ready;
        self.pending.take().map(|p| p.ticket)
    }

    // ─────────────────────────────────────────────────────────
    // Input editing
    // ─────────────────────────────────────────────────────────

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Whether the send action is currently enabled
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty() && self.pending.is_none()
    }

    // ─────────────────────────────────────────────────────────
    // Example commands
    // ─────────────────────────────────────────────────────────

    pub fn select_next_example(&mut self) {
        let len = catalog::EXAMPLE_COMMANDS.len();
        self.selected_example = (self.selected_example + 1) % len;
    }

    pub fn select_prev_example(&mut self) {
        let len = catalog::EXAMPLE_COMMANDS.len();
        self.selected_example = (self.selected_example + len - 1) % len;
    }

    pub fn selected_example_text(&self) -> &'static str {
        catalog::EXAMPLE_COMMANDS[self.selected_example]
    }
}

fn seed_lines(seed: &[&str]) -> Vec<ConsoleLine> {
    seed.iter().map(|text| ConsoleLine::system(*text)).collect()
}
