//! Main TUI runner - entry point and event loop

use lore_app::config::Settings;
use lore_app::{signals, Engine};
use lore_core::prelude::*;

use crate::{event, render};

/// Run the TUI until the user quits or a termination signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    install_panic_hook();

    let mut engine = Engine::new(settings);
    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("Lore Agent TUI started");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))?;
    info!("Lore Agent TUI stopped");

    result
}

/// Main event loop
///
/// Each iteration drains messages from background tasks, renders, then
/// blocks on terminal input for at most one poll interval.
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll().context("Failed to poll terminal events")? {
            engine.process_message(message);
        }
    }

    Ok(())
}

/// Install a panic hook that restores the terminal before reporting
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
