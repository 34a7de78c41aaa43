//! Footer with links and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lore_core::catalog;

use crate::theme::styles;

pub struct Footer {
    /// The console input has focus, so plain letters are typed
    console_focused: bool,
}

impl Footer {
    pub fn new(console_focused: bool) -> Self {
        Self { console_focused }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.console_focused {
            &[
                ("Tab", "switch"),
                ("Enter", "send"),
                ("↑↓", "example"),
                ("^E", "run"),
                ("^R", "reset"),
                ("^W", "wallet"),
                ("^C", "quit"),
            ]
        } else {
            &[
                ("Tab/1-5", "switch"),
                ("c", "connect"),
                ("p", "profile"),
                ("x", "𝕏"),
                ("q", "quit"),
            ]
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut links = vec![Span::styled(
            format!("{}  ", catalog::PRODUCT_NAME),
            styles::accent_bold(),
        )];
        for link in catalog::FOOTER_LINKS {
            links.push(Span::styled(format!("{link}  "), styles::text_secondary()));
        }

        let mut hints = Vec::new();
        for (key, action) in self.hints() {
            hints.push(Span::styled(*key, styles::keybinding()));
            hints.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }

        Paragraph::new(vec![Line::from(links), Line::from(hints)]).render(inner, buf);
    }
}
