//! Header bar: product name, navigation tabs and the wallet pill

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};
use unicode_width::UnicodeWidthStr;

use lore_app::SessionState;
use lore_core::{catalog, Tab};

use crate::theme::styles;

/// Main header showing the product name, tabs and wallet state
pub struct MainHeader<'a> {
    session: &'a SessionState,
    balance: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(session: &'a SessionState, balance: &'a str) -> Self {
        Self { session, balance }
    }

    /// Text of the wallet pill for the current connection state
    pub fn wallet_label(&self) -> String {
        if self.session.connected {
            format!("● Connected · {} SOL", self.balance)
        } else if self.session.loading {
            "⏳ Connecting...".to_string()
        } else {
            "💼 Connect Wallet".to_string()
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = format!("◆ {} ", catalog::PRODUCT_NAME);
        let wallet = self.wallet_label();
        let [title_area, tabs_area, wallet_area] = Layout::horizontal([
            Constraint::Length(title.width() as u16),
            Constraint::Min(0),
            Constraint::Length(wallet.width() as u16 + 1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(title, styles::accent_bold())).render(title_area, buf);

        let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.label())).collect();
        Tabs::new(titles)
            .select(self.session.active_tab.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(tabs_area, buf);

        let wallet_style = if self.session.connected {
            styles::accent()
        } else {
            styles::focused_selected()
        };
        Paragraph::new(Span::styled(wallet, wallet_style))
            .right_aligned()
            .render(wallet_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_label_follows_connection() {
        let mut session = SessionState::default();
        assert_eq!(
            MainHeader::new(&session, "45.32").wallet_label(),
            "💼 Connect Wallet"
        );

        session.begin_connect();
        assert_eq!(
            MainHeader::new(&session, "45.32").wallet_label(),
            "⏳ Connecting..."
        );

        session.finish_connect();
        assert_eq!(
            MainHeader::new(&session, "45.32").wallet_label(),
            "● Connected · 45.32 SOL"
        );
    }
}
