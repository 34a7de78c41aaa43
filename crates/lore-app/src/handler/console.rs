//! Agent console handlers: submission, delayed reply and reset

use std::time::Duration;

use tracing::{debug, trace};

use crate::console::ReplyTicket;
use crate::responder;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Submit whatever is typed in the command input
pub fn handle_submit_input(state: &mut AppState) -> UpdateResult {
    let text = state.console.input.clone();
    submit(state, &text)
}

/// Submit `text` as if it had been typed (example commands, headless mode).
///
/// While a reply is pending this is a no-op and the input is left alone.
pub fn handle_submit_command(state: &mut AppState, text: String) -> UpdateResult {
    if state.console.is_pending() {
        debug!("Ignoring command while a reply is pending: {:?}", text);
        return UpdateResult::none();
    }
    state.console.input = text.clone();
    submit(state, &text)
}

fn submit(state: &mut AppState, text: &str) -> UpdateResult {
    match state.console.submit(text) {
        Some(ticket) => {
            let delay = Duration::from_millis(state.settings.console.reply_delay_ms);
            debug!("Accepted submission #{} ({:?}), reply in {:?}", ticket, text, delay);
            UpdateResult::action_with_cue(UpdateAction::ScheduleReply { ticket, delay })
        }
        None => {
            trace!("Submission rejected (blank or pending)");
            UpdateResult::none()
        }
    }
}

/// A scheduled reply woke up. Stale tickets change nothing.
pub fn handle_reply_due(state: &mut AppState, ticket: ReplyTicket) -> UpdateResult {
    let Some(text) = state.console.take_due(ticket) else {
        debug!("Dropping stale reply #{}", ticket);
        return UpdateResult::none();
    };

    let reply = responder::synthesize(&text, &state.settings.wallet.balance, &mut state.rng);
    debug!("Reply #{} ({:?})", ticket, reply.category);
    state.console.complete(reply.text);

    UpdateResult::none()
}

/// Restore the reset seed and cancel the in-flight reply, if any
pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    match state.console.reset() {
        Some(ticket) => {
            debug!("Console reset, cancelling reply #{}", ticket);
            UpdateResult::action_with_cue(UpdateAction::CancelReply { ticket })
        }
        None => UpdateResult::cue(),
    }
}
