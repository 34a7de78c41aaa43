//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lore_app::{InputKey, Message};
use lore_core::prelude::*;
use std::time::Duration;

/// Poll timeout, also the tick period for the cursor blink
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => Some(InputKey::CharCtrl(c.to_ascii_lowercase())),
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Poll for terminal events, producing `Message::Tick` on timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<InputKey> {
        key_event_to_input(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_and_ctrl_chars() {
        assert_eq!(key(KeyCode::Char('a'), KeyModifiers::NONE), Some(InputKey::Char('a')));
        assert_eq!(
            key(KeyCode::Char('r'), KeyModifiers::CONTROL),
            Some(InputKey::CharCtrl('r'))
        );
        // Some terminals report Ctrl+Shift+letter as uppercase
        assert_eq!(
            key(KeyCode::Char('R'), KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            Some(InputKey::CharCtrl('r'))
        );
    }

    #[test]
    fn test_uppercase_without_ctrl_is_typed() {
        assert_eq!(key(KeyCode::Char('S'), KeyModifiers::SHIFT), Some(InputKey::Char('S')));
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        assert_eq!(key(KeyCode::Tab, KeyModifiers::SHIFT), Some(InputKey::BackTab));
        assert_eq!(key(KeyCode::BackTab, KeyModifiers::SHIFT), Some(InputKey::BackTab));
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Some(InputKey::Tab));
    }

    #[test]
    fn test_function_keys_pass_through() {
        assert_eq!(key(KeyCode::F(4), KeyModifiers::NONE), Some(InputKey::F(4)));
        assert_eq!(key(KeyCode::F(12), KeyModifiers::NONE), Some(InputKey::F(12)));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(key(KeyCode::Insert, KeyModifiers::NONE), None);
        assert_eq!(key(KeyCode::PageUp, KeyModifiers::NONE), None);
    }
}
