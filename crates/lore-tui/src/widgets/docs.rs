//! Documentation panel

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use lore_core::catalog;

use crate::theme::styles;

pub struct DocsPanel;

impl Widget for DocsPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [intro, rest] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(4)]).areas(area);
        let [sections, tutorials] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(rest);

        Paragraph::new(vec![
            Line::from(Span::styled(catalog::DOCS_INTRO, styles::text_secondary())),
            Line::from(vec![
                Span::styled(" Quick Start Guide ", styles::focused_selected()),
                Span::raw("  "),
                Span::styled(" API Reference ", styles::text_secondary()),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .block(styles::card("Getting Started with Lore Agent"))
        .render(intro, buf);

        let mut section_lines = Vec::new();
        for section in catalog::DOC_SECTIONS {
            section_lines.push(Line::from(vec![
                Span::raw(format!("{} ", section.icon)),
                Span::styled(section.title, styles::accent_bold()),
            ]));
            section_lines.push(Line::from(Span::styled(
                format!("   {}  Read More →", section.description),
                styles::text_secondary(),
            )));
        }
        Paragraph::new(section_lines)
            .wrap(Wrap { trim: false })
            .block(styles::card("📚 Documentation Sections"))
            .render(sections, buf);

        let mut tutorial_lines: Vec<Line> = catalog::TUTORIALS
            .iter()
            .map(|t| Line::from(Span::styled(format!("• {t}"), styles::text_primary())))
            .collect();
        tutorial_lines.push(Line::from(""));
        tutorial_lines.push(Line::from(Span::styled(
            "View All Tutorials →",
            styles::accent(),
        )));
        Paragraph::new(tutorial_lines)
            .wrap(Wrap { trim: true })
            .block(styles::card("Examples & Tutorials"))
            .render(tutorials, buf);
    }
}
