//! Standalone profile card, shown as a modal overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use lore_core::catalog::{self, Profile};

use crate::layout::centered_rect;
use crate::theme::styles;

pub const CARD_WIDTH: u16 = 44;
pub const CARD_HEIGHT: u16 = 11;

pub struct ProfileCard<'a> {
    profile: &'a Profile,
}

impl<'a> ProfileCard<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }
}

impl Default for ProfileCard<'static> {
    fn default() -> Self {
        Self::new(&catalog::PROFILE)
    }
}

fn field<'l>(label: &str, value: &'l str) -> Line<'l> {
    Line::from(vec![
        Span::styled(format!("{label:<13}"), styles::text_secondary()),
        Span::styled(value, styles::text_primary()),
    ])
}

impl Widget for ProfileCard<'_> {
    /// `area` is the whole screen; the card centers itself in it
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        Clear.render(card, buf);

        let lines = vec![
            Line::from(Span::styled("User Profile", styles::accent_bold())).centered(),
            Line::from(""),
            field("Wallet", self.profile.wallet_address),
            field("Balance", self.profile.balance),
            field("Permissions", self.profile.permissions),
            Line::from(""),
            Line::from(Span::styled(" Update Profile (Enter) ", styles::focused_selected()))
                .centered(),
            Line::from(Span::styled("Esc close", styles::text_muted())).centered(),
        ];

        Paragraph::new(lines)
            .block(styles::modal_block("Profile"))
            .render(card, buf);
    }
}
