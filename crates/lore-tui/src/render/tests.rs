//! Full-frame render tests

use super::view;
use crate::test_utils::{test_state, TestTerminal};
use lore_app::handler::update;
use lore_app::Message;
use lore_core::Tab;

fn render(state: &lore_app::AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_header_shows_product_tabs_and_wallet() {
    let term = render(&test_state());

    assert!(term.line_contains(1, "LORE AGENT"));
    for tab in Tab::ALL {
        assert!(term.line_contains(1, tab.label()), "missing tab {tab}");
    }
    assert!(term.line_contains(1, "Connect Wallet"));
}

#[test]
fn test_connected_wallet_shows_balance() {
    let mut state = test_state();
    state.session.finish_connect();

    let term = render(&state);

    assert!(term.buffer_contains("Connected · 45.32 SOL"));
    assert!(!term.buffer_contains("Connect Wallet"));
}

#[test]
fn test_home_panel_by_default() {
    let term = render(&test_state());
    assert!(term.buffer_contains("a Solana agent"));
    assert!(term.buffer_contains("$LORE"));
    assert!(term.buffer_contains("Documentation  API  Support  Privacy"));
}

#[test]
fn test_each_tab_renders_its_panel() {
    let cases = [
        (Tab::Features, "Your AI-Powered Solana Agent"),
        (Tab::Dashboard, "Portfolio Overview"),
        (Tab::Agent, "Lore Agent Terminal"),
        (Tab::Docs, "Getting Started with Lore Agent"),
    ];

    for (tab, marker) in cases {
        let mut state = test_state();
        state.session.select_tab(tab);
        let term = render(&state);
        assert!(term.buffer_contains(marker), "{tab}:\n{}", term.content());
        assert!(!term.buffer_contains("a Solana agent"));
    }
}

#[test]
fn test_dashboard_balance_metric_follows_settings() {
    let mut state = test_state();
    state.settings.wallet.balance = "99.99".to_string();
    state.session.select_tab(Tab::Dashboard);

    let term = render(&state);

    assert!(term.buffer_contains("99.99"));
    assert!(term.buffer_contains("Task Success Rate 87%"));
}

#[test]
fn test_agent_tab_shows_sidebar() {
    let mut state = test_state();
    state.session.select_tab(Tab::Agent);

    let term = render(&state);

    assert!(term.buffer_contains("Example Commands"));
    assert!(term.buffer_contains("Agent Configuration"));
    assert!(term.buffer_contains("Status: Ready"));
}

#[test]
fn test_advanced_mode_replaces_tabbed_layout() {
    let mut state = test_state();
    state.session.select_tab(Tab::Agent);
    state.session.toggle_advanced_mode();

    let term = render(&state);

    assert!(term.buffer_contains("Agent Console (Advanced Mode)"));
    assert!(term.buffer_contains("Lore Agent Terminal"));
    assert!(!term.buffer_contains("Connect Wallet"));
    assert!(!term.buffer_contains("Privacy"));
}

#[test]
fn test_advanced_mode_off_agent_tab_keeps_layout() {
    let mut state = test_state();
    state.session.toggle_advanced_mode();

    let term = render(&state);

    assert!(!term.buffer_contains("(Advanced Mode)"));
    assert!(term.buffer_contains("Connect Wallet"));
}

#[test]
fn test_submitted_command_and_reply_are_rendered() {
    let mut state = test_state();
    update(&mut state, Message::SelectTab(Tab::Agent));
    update(&mut state, Message::SubmitCommand("Swap 2 SOL for USDC".into()));

    let term = render(&state);
    assert!(term.buffer_contains("> Swap 2 SOL for USDC"));
    assert!(term.buffer_contains("Status: Processing"));

    update(&mut state, Message::ReplyDue { ticket: 1 });
    let term = render(&state);
    assert!(term.buffer_contains("LORE_AGENT: Processing swap request."));
    assert!(term.buffer_contains("Status: Ready"));
}

#[test]
fn test_reset_renders_reset_seed() {
    let mut state = test_state();
    update(&mut state, Message::SelectTab(Tab::Agent));
    update(&mut state, Message::ResetConsole);

    let term = render(&state);

    assert!(term.buffer_contains("// Agent console reset"));
    assert!(!term.buffer_contains("// Agent console initialized"));
}

#[test]
fn test_profile_overlay() {
    let mut state = test_state();
    state.toggle_profile();

    let term = render(&state);

    assert!(term.buffer_contains("User Profile"));
    assert!(term.buffer_contains("4Qkev2QdgdkT..."));
    assert!(term.buffer_contains("Read & Execute"));
    assert!(term.buffer_contains("Update Profile"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = test_state();
    for tab in Tab::ALL {
        state.session.select_tab(tab);
        let mut term = TestTerminal::with_size(20, 6);
        term.draw_with(|frame| view(frame, &state));
    }
    state.session.toggle_advanced_mode();
    state.show_profile = true;
    let mut term = TestTerminal::with_size(10, 4);
    term.draw_with(|frame| view(frame, &state));
}
