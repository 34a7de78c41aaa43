//! Features panel: pitch, highlights, feature cards and onboarding steps

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use lore_core::catalog;

use crate::theme::styles;

pub struct FeaturesPanel;

impl Widget for FeaturesPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [intro, highlights, cards, steps] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(5),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled("Your AI-Powered Solana Agent", styles::heading())),
            Line::from(Span::styled(
                "Execute advanced blockchain operations with simple natural language commands",
                styles::text_secondary(),
            )),
            Line::from(vec![
                Span::styled(" Launch Agent Console (4) ", styles::focused_selected()),
                Span::raw("  "),
                Span::styled(" View Documentation (5) ", styles::text_secondary()),
            ]),
        ])
        .centered()
        .wrap(Wrap { trim: true })
        .render(intro, buf);

        let columns =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(highlights);
        for (highlight, col) in catalog::HIGHLIGHTS.iter().zip(columns.iter()) {
            Paragraph::new(Span::styled(highlight.body, styles::text_secondary()))
                .wrap(Wrap { trim: true })
                .block(styles::card(highlight.title))
                .render(*col, buf);
        }

        let card_lines: Vec<Line> = catalog::FEATURES
            .iter()
            .map(|f| {
                Line::from(vec![
                    Span::raw(format!("{} ", f.icon)),
                    Span::styled(f.title, styles::accent_bold()),
                    Span::styled(format!("  {}", f.description), styles::text_secondary()),
                ])
            })
            .collect();
        Paragraph::new(card_lines)
            .wrap(Wrap { trim: true })
            .block(styles::card("Key Features"))
            .render(cards, buf);

        let step_lines: Vec<Line> = catalog::GET_STARTED
            .iter()
            .enumerate()
            .map(|(i, step)| {
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), styles::focused_selected()),
                    Span::styled(format!(" {}", step.title), styles::text_primary()),
                    Span::styled(format!("  {}", step.body), styles::text_muted()),
                ])
            })
            .collect();
        Paragraph::new(step_lines)
            .block(styles::card("Get Started in Minutes"))
            .render(steps, buf);
    }
}
