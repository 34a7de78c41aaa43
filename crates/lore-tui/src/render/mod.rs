//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use lore_app::AppState;
use lore_core::Tab;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure projection of `state`; nothing here mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    if state.session.is_fullscreen_console() {
        render_fullscreen_console(frame, area, state);
    } else {
        let areas = layout::create(area);

        frame.render_widget(
            widgets::MainHeader::new(&state.session, state.balance()),
            areas.header,
        );
        render_panel(frame, areas.body, state);
        frame.render_widget(widgets::Footer::new(state.is_console_focused()), areas.footer);
    }

    if state.show_profile {
        frame.render_widget(widgets::ProfileCard::default(), area);
    }
}

/// Render the active tab's panel into `area`
fn render_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.session.active_tab {
        Tab::Home => frame.render_widget(widgets::HomePanel, area),
        Tab::Features => frame.render_widget(widgets::FeaturesPanel, area),
        Tab::Dashboard => frame.render_widget(widgets::DashboardPanel::new(state.balance()), area),
        Tab::Agent => render_console(frame, area, state),
        Tab::Docs => frame.render_widget(widgets::DocsPanel, area),
    }
}

fn render_console(frame: &mut Frame, area: Rect, state: &AppState) {
    let areas = layout::console(area);

    frame.render_widget(
        widgets::AgentConsole::new(&state.console, state.tick),
        areas.terminal,
    );
    if !areas.examples.is_empty() {
        frame.render_widget(widgets::ExampleCommands::new(&state.console), areas.examples);
        frame.render_widget(
            widgets::ConsoleConfig::new(&state.session, state.transaction_limit_label()),
            areas.config,
        );
    }
}

/// Advanced mode: the console takes the whole screen, no header or footer
fn render_fullscreen_console(frame: &mut Frame, area: Rect, state: &AppState) {
    let [title, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).areas(area);

    let bar = styles::glass_block(true).title(
        Line::from(Span::styled(" Esc Exit Advanced Mode ", styles::keybinding())).right_aligned(),
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Agent Console ", styles::heading()),
            Span::styled("(Advanced Mode)", styles::accent()),
        ]))
        .block(bar),
        title,
    );

    render_console(frame, body, state);
}
