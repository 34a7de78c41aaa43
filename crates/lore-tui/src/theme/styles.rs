//! Semantic style builders

use lore_core::AgentStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::ACCENT_SOFT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Up/down coloring for percentage changes
pub fn change(up: bool) -> Style {
    if up {
        Style::default().fg(palette::STATUS_GREEN)
    } else {
        Style::default().fg(palette::STATUS_RED)
    }
}

/// "Black on green" - active tab, primary buttons, selected rows
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Pill for the agent status badge
pub fn agent_status(status: AgentStatus) -> Style {
    match status {
        AgentStatus::Ready => Style::default().fg(palette::STATUS_GREEN),
        AgentStatus::Processing => Style::default().fg(palette::STATUS_YELLOW),
    }
}

/// On/off switch text for a boolean setting
pub fn switch(on: bool) -> (&'static str, Style) {
    if on {
        ("[ ON ]", focused_selected())
    } else {
        ("[OFF ]", text_muted())
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        }))
        .style(Style::default().bg(palette::CARD_BG))
}

/// Rounded card with a green heading
pub fn card(title: &str) -> Block<'_> {
    glass_block(false).title(ratatui::text::Span::styled(format!(" {title} "), heading()))
}

pub fn modal_block(title: &str) -> Block<'_> {
    glass_block(true)
        .title(ratatui::text::Span::styled(format!(" {title} "), heading()))
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_labels_have_same_width() {
        let (on, _) = switch(true);
        let (off, _) = switch(false);
        assert_eq!(on.len(), off.len());
    }

    #[test]
    fn test_agent_status_colors_differ() {
        assert_ne!(
            agent_status(AgentStatus::Ready),
            agent_status(AgentStatus::Processing)
        );
    }
}
