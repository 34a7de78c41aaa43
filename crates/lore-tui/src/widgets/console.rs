//! Agent console widgets: transcript terminal, example commands and the
//! configuration sidebar

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use lore_app::{ConsoleState, SessionState};
use lore_core::{catalog, LineKind};

use crate::theme::{palette, styles};

const USER_PREFIX: &str = "> ";
const AGENT_PREFIX: &str = "LORE_AGENT: ";
const PLACEHOLDER: &str = "Enter a command for Lore Agent...";

/// Ticks per half period of the processing cursor blink
const BLINK_TICKS: u64 = 10;

/// Greedy word wrap to `width` display columns.
///
/// Words wider than `width` are split. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split(' ') {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        // Hard-split words that cannot fit on a line of their own
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    lines.push(current);
    lines
}

/// The console terminal: status, transcript and command input
pub struct AgentConsole<'a> {
    console: &'a ConsoleState,
    tick: u64,
}

impl<'a> AgentConsole<'a> {
    pub fn new(console: &'a ConsoleState, tick: u64) -> Self {
        Self { console, tick }
    }

    /// Wrap the transcript to `width` and style each line by its kind
    fn transcript_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut out = Vec::new();

        for line in &self.console.lines {
            let (prefix, prefix_style, text_style) = match line.kind {
                LineKind::System => ("", Style::default(), styles::text_muted()),
                LineKind::User => (
                    USER_PREFIX,
                    Style::default().fg(palette::PROMPT),
                    styles::text_primary(),
                ),
                LineKind::Agent => (
                    AGENT_PREFIX,
                    Style::default().fg(palette::AGENT_TAG),
                    styles::text_primary(),
                ),
            };

            let full = format!("{prefix}{}", line.text);
            for (i, row) in wrap_text(&full, width).into_iter().enumerate() {
                match row.strip_prefix(prefix) {
                    Some(rest) if i == 0 && !prefix.is_empty() => out.push(Line::from(vec![
                        Span::styled(prefix, prefix_style),
                        Span::styled(rest.to_string(), text_style),
                    ])),
                    _ => out.push(Line::from(Span::styled(row, text_style))),
                }
            }
        }

        if self.console.status.is_processing() && (self.tick / BLINK_TICKS) % 2 == 0 {
            out.push(Line::from(Span::styled("_", styles::accent())));
        }

        out
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let send = " Send ⏎ ";
        let [input_area, send_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(send.width() as u16)])
                .areas(inner);

        let input = &self.console.input;
        let line = if input.is_empty() {
            Line::from(vec![
                Span::styled(USER_PREFIX, Style::default().fg(palette::PROMPT)),
                Span::styled(PLACEHOLDER, styles::text_muted()),
            ])
        } else {
            // Keep the end of long input visible
            let room = (input_area.width as usize).saturating_sub(USER_PREFIX.len() + 1);
            let mut start = 0;
            while input[start..].width() > room {
                start += input[start..].chars().next().map_or(1, char::len_utf8);
            }
            Line::from(vec![
                Span::styled(USER_PREFIX, Style::default().fg(palette::PROMPT)),
                Span::styled(input[start..].to_string(), styles::text_primary()),
                Span::styled("█", styles::accent()),
            ])
        };
        Paragraph::new(line).render(input_area, buf);

        let send_style = if self.console.can_send() {
            styles::focused_selected()
        } else {
            styles::text_muted()
        };
        Paragraph::new(Span::styled(send, send_style)).render(send_area, buf);
    }
}

impl Widget for AgentConsole<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.console.status;
        let block = styles::card("⚙ Lore Agent Terminal").title(
            Line::from(vec![
                Span::styled("Status: ", styles::text_secondary()),
                Span::styled(status.label(), styles::agent_status(status)),
                Span::styled("  ^R Reset ", styles::text_muted()),
            ])
            .right_aligned(),
        );
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width < 4 {
            return;
        }

        let [transcript, input] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);

        let mut lines = self.transcript_lines(transcript.width as usize);
        let visible = transcript.height as usize;
        if lines.len() > visible {
            lines.drain(..lines.len() - visible);
        }
        Paragraph::new(lines).render(transcript, buf);

        self.render_input(input, buf);
    }
}

/// Example command list; Up/Down moves the highlight, Ctrl+E runs it
pub struct ExampleCommands<'a> {
    console: &'a ConsoleState,
}

impl<'a> ExampleCommands<'a> {
    pub fn new(console: &'a ConsoleState) -> Self {
        Self { console }
    }
}

impl Widget for ExampleCommands<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = catalog::EXAMPLE_COMMANDS
            .iter()
            .enumerate()
            .map(|(i, cmd)| {
                if i == self.console.selected_example {
                    Line::from(Span::styled(format!("▶ {cmd}"), styles::focused_selected()))
                } else {
                    Line::from(Span::styled(format!("  {cmd}"), styles::text_secondary()))
                }
            })
            .collect();

        Paragraph::new(lines)
            .block(styles::card("Example Commands"))
            .render(area, buf);
    }
}

/// The configuration sidebar: three switches and the transaction limit
pub struct ConsoleConfig<'a> {
    session: &'a SessionState,
    limit: &'a str,
}

impl<'a> ConsoleConfig<'a> {
    pub fn new(session: &'a SessionState, limit: &'a str) -> Self {
        Self { session, limit }
    }
}

impl Widget for ConsoleConfig<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let row = |label: &'static str, key: &'static str, on: bool| {
            let (text, style) = styles::switch(on);
            Line::from(vec![
                Span::styled(text, style),
                Span::styled(format!(" {label} "), styles::text_secondary()),
                Span::styled(key, styles::keybinding()),
            ])
        };

        let lines = vec![
            row("Transaction Approval", "^T", self.session.transaction_approval),
            row("Real-time Notifications", "^N", self.session.notifications),
            row("Advanced Mode", "^A", self.session.advanced_mode),
            Line::from(vec![
                Span::styled("Transaction Limit: ", styles::text_secondary()),
                Span::styled(self.limit.to_string(), styles::accent_bold()),
                Span::styled(" ^L", styles::keybinding()),
            ]),
        ];

        Paragraph::new(lines)
            .block(styles::card("Agent Configuration"))
            .render(area, buf);
    }
}
