//! Key event handlers for the different focus modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use lore_core::Tab;

/// Convert key events to messages based on what currently has focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.show_profile {
        return handle_key_profile(key);
    }

    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    if state.session.is_fullscreen_console() {
        handle_key_fullscreen_console(key)
    } else if state.is_console_focused() {
        handle_key_console(key)
    } else {
        handle_key_normal(key)
    }
}

/// Bindings that work everywhere except under the profile overlay
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PreviousTab),
        InputKey::F(n @ 1..=5) => Tab::from_index(usize::from(n - 1)).map(Message::SelectTab),
        InputKey::F(12) => Some(Message::OpenSocialLink),

        InputKey::CharCtrl('w') => Some(Message::ConnectWallet),
        InputKey::CharCtrl('p') => Some(Message::ToggleProfile),

        InputKey::CharCtrl('r') => Some(Message::ResetConsole),
        InputKey::CharCtrl('t') => Some(Message::ToggleTransactionApproval),
        InputKey::CharCtrl('n') => Some(Message::ToggleNotifications),
        InputKey::CharCtrl('a') => Some(Message::ToggleAdvancedMode),
        InputKey::CharCtrl('l') => Some(Message::CycleTransactionLimit),

        _ => None,
    }
}

/// Handle key events while the profile card overlay is shown
fn handle_key_profile(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('p') | InputKey::CharCtrl('p') => {
            Some(Message::ToggleProfile)
        }
        InputKey::Enter | InputKey::Char('u') => Some(Message::UpdateProfile),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the non-console panels
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Char(c @ '1'..='5') => c
            .to_digit(10)
            .and_then(|d| Tab::from_index(d as usize - 1))
            .map(Message::SelectTab),

        InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),
        InputKey::Left | InputKey::Char('h') => Some(Message::PreviousTab),

        InputKey::Char('c') => Some(Message::ConnectWallet),
        InputKey::Char('p') => Some(Message::ToggleProfile),
        InputKey::Char('x') => Some(Message::OpenSocialLink),

        _ => None,
    }
}

/// Handle key events while the command input has focus
fn handle_key_console(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitInput),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::ClearInput),

        InputKey::Up => Some(Message::PreviousExample),
        InputKey::Down => Some(Message::NextExample),
        InputKey::CharCtrl('e') => Some(Message::RunSelectedExample),

        InputKey::Char(c) => Some(Message::InputChar(c)),

        _ => None,
    }
}

/// Full-screen console: same as the console, Esc leaves advanced mode
fn handle_key_fullscreen_console(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ToggleAdvancedMode),
        _ => handle_key_console(key),
    }
}
