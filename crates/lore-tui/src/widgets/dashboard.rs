//! Dashboard panel: metric cards, activity timeline, performance gauges,
//! quick actions and the portfolio table

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Gauge, Paragraph, Row, Table, Widget},
};

use lore_core::catalog;

use crate::theme::{palette, styles};

pub struct DashboardPanel<'a> {
    balance: &'a str,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(balance: &'a str) -> Self {
        Self { balance }
    }

    fn render_metrics(&self, area: Rect, buf: &mut Buffer) {
        let count = catalog::METRICS.len();
        let constraints = vec![Constraint::Ratio(1, count as u32); count];
        let cells = Layout::horizontal(constraints).split(area);

        for (metric, cell) in catalog::METRICS.iter().zip(cells.iter()) {
            let value = metric.value.unwrap_or(self.balance);
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{} {}", metric.icon, metric.label),
                    styles::text_secondary(),
                )),
                Line::from(Span::styled(value, styles::accent_bold())),
            ])
            .block(styles::glass_block(false))
            .render(*cell, buf);
        }
    }

    fn render_activity(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = catalog::ACTIVITY
            .iter()
            .map(|a| {
                Line::from(vec![
                    Span::styled("● ", styles::accent()),
                    Span::styled(a.action, styles::text_primary()),
                    Span::styled(format!("  {}", a.time), styles::text_muted()),
                ])
            })
            .collect();
        Paragraph::new(lines)
            .block(styles::card("Activity Timeline"))
            .render(area, buf);
    }

    fn render_performance(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card("Agent Performance");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical(vec![Constraint::Length(1); catalog::PERFORMANCE.len()])
            .split(inner);
        for (stat, row) in catalog::PERFORMANCE.iter().zip(rows.iter()) {
            Gauge::default()
                .gauge_style(styles::accent().bg(palette::BORDER_DIM))
                .percent(stat.percent)
                .label(format!("{} {}%", stat.label, stat.percent))
                .render(*row, buf);
        }
    }

    fn render_quick_actions(&self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = catalog::QUICK_ACTIONS
            .iter()
            .flat_map(|a| {
                [
                    Span::styled(format!(" {a} "), styles::focused_selected()),
                    Span::raw(" "),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans))
            .block(styles::card("Quick Actions"))
            .render(area, buf);
    }

    fn render_portfolio(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Token", "Balance", "Value", "24h"]).style(styles::text_muted());
        let rows = catalog::PORTFOLIO.iter().map(|h| {
            Row::new([
                Cell::from(Span::styled(h.token, styles::text_primary())),
                Cell::from(h.balance),
                Cell::from(h.value),
                Cell::from(Span::styled(h.change, styles::change(h.is_up()))),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(11),
                Constraint::Length(10),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(styles::card("Portfolio Overview"))
        .render(area, buf);
    }
}

impl Widget for DashboardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [metrics, middle, bottom] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(7),
        ])
        .areas(area);
        self.render_metrics(metrics, buf);

        let [activity, performance] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(middle);
        self.render_activity(activity, buf);
        self.render_performance(performance, buf);

        let [actions, portfolio] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(bottom);
        self.render_quick_actions(actions, buf);
        self.render_portfolio(portfolio, buf);
    }
}
