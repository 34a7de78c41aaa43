//! Home panel: hero with the ticker and two call-to-action buttons

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use lore_core::catalog;

use crate::theme::styles;

pub struct HomePanel;

impl Widget for HomePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(catalog::PRODUCT_NAME, styles::heading())),
            Line::from(Span::styled("a Solana agent", styles::text_primary())),
            Line::from(""),
            Line::from(Span::styled(catalog::TICKER, styles::accent_bold())),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Launch Agent (4) ", styles::focused_selected()),
                Span::raw("   "),
                Span::styled(" Explore Features (2) ", styles::text_secondary()),
            ]),
        ];

        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
