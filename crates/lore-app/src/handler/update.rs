//! Main update function - handles state transitions (TEA pattern)

use std::time::Duration;

use crate::message::Message;
use crate::state::AppState;
use lore_core::AppPhase;
use tracing::{debug, info};

use super::{console, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            state.session.select_tab(tab);
            UpdateResult::cue()
        }
        Message::NextTab => {
            let tab = state.session.active_tab.next();
            UpdateResult::message(Message::SelectTab(tab))
        }
        Message::PreviousTab => {
            let tab = state.session.active_tab.prev();
            UpdateResult::message(Message::SelectTab(tab))
        }

        // ─────────────────────────────────────────────────────────
        // Wallet
        // ─────────────────────────────────────────────────────────
        Message::ConnectWallet => {
            if !state.session.begin_connect() {
                return UpdateResult::none();
            }
            let delay = Duration::from_millis(state.settings.wallet.connect_delay_ms);
            debug!("Connecting wallet (simulated, {:?})", delay);
            UpdateResult::action_with_cue(UpdateAction::ConnectWallet { delay })
        }
        Message::WalletConnected => {
            state.session.finish_connect();
            info!("Wallet connected (simulated)");
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Agent console
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            state.console.push_char(c);
            UpdateResult::none()
        }
        Message::InputBackspace => {
            state.console.backspace();
            UpdateResult::none()
        }
        Message::ClearInput => {
            state.console.clear_input();
            UpdateResult::none()
        }
        Message::SubmitInput => console::handle_submit_input(state),
        Message::SubmitCommand(text) => console::handle_submit_command(state, text),
        Message::NextExample => {
            state.console.select_next_example();
            UpdateResult::none()
        }
        Message::PreviousExample => {
            state.console.select_prev_example();
            UpdateResult::none()
        }
        Message::RunSelectedExample => {
            let text = state.console.selected_example_text().to_string();
            console::handle_submit_command(state, text)
        }
        Message::ReplyDue { ticket } => console::handle_reply_due(state, ticket),
        Message::ResetConsole => console::handle_reset(state),

        // ─────────────────────────────────────────────────────────
        // Settings toggles
        // ─────────────────────────────────────────────────────────
        Message::ToggleTransactionApproval => {
            state.session.toggle_transaction_approval();
            UpdateResult::cue()
        }
        Message::ToggleNotifications => {
            state.session.toggle_notifications();
            UpdateResult::cue()
        }
        Message::ToggleAdvancedMode => {
            state.session.toggle_advanced_mode();
            UpdateResult::cue()
        }
        Message::CycleTransactionLimit => {
            state.cycle_transaction_limit();
            UpdateResult::cue()
        }

        // ─────────────────────────────────────────────────────────
        // Decorative
        // ─────────────────────────────────────────────────────────
        Message::ToggleProfile => {
            state.toggle_profile();
            UpdateResult::cue()
        }
        Message::UpdateProfile => UpdateResult::cue(),
        Message::OpenSocialLink => {
            let links = &state.settings.links;
            UpdateResult::action_with_cue(UpdateAction::OpenUrl {
                url: links.social_url.clone(),
                browser: links.browser.clone(),
            })
        }
        Message::PlayCue => {
            if state.settings.feedback.bell {
                UpdateResult::action(UpdateAction::PlayCue)
            } else {
                UpdateResult::none()
            }
        }
    }
}
