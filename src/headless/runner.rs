//! Headless mode runner - scripted event loop without TUI

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use lore_app::config::Settings;
use lore_app::{signals, Engine, Message};
use lore_core::prelude::*;
use lore_core::AgentStatus;

use super::HeadlessEvent;

/// Run in headless mode: commands from stdin, JSON events on stdout
pub async fn run_headless(mut settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Lore Agent starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    // BEL on stdout would corrupt the event stream
    settings.feedback.bell = false;

    let mut engine = Engine::new(settings);
    signals::spawn_signal_handler(engine.msg_sender());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    let result = run_script(&mut engine, stdin, &mut stdout)
        .await
        .context("Headless script failed");

    engine.shutdown();
    info!("Lore Agent headless mode exiting");
    result
}

/// Drive `engine` with the commands read from `input`, writing NDJSON
/// events to `out`. Returns at end of input or on `/quit`.
pub async fn run_script<R, W>(engine: &mut Engine, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut transcript = Transcript::default();
    transcript.flush(engine, out)?;

    let mut lines = input.lines();

    while !engine.should_quit() {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            msg = engine.msg_rx.recv() => {
                match msg {
                    Some(msg) => engine.process_message(msg),
                    None => break,
                }
                transcript.flush(engine, out)?;
                continue;
            }
        };

        let Some(line) = line else {
            debug!("End of headless input");
            break;
        };

        match line.trim() {
            "" => {}
            "/quit" => engine.process_message(Message::Quit),
            "/reset" => {
                engine.process_message(Message::ResetConsole);
                transcript.rewind();
            }
            "/connect" => connect(engine, out).await?,
            meta if meta.starts_with('/') => warn!("Unknown headless command: {}", meta),
            command => {
                engine.process_message(Message::SubmitCommand(command.to_string()));
                transcript.flush(engine, out)?;
                await_reply(engine).await?;
            }
        }

        transcript.flush(engine, out)?;
    }

    Ok(())
}

/// Process background messages until the pending reply has landed
async fn await_reply(engine: &mut Engine) -> Result<()> {
    while engine.state.console.is_pending() && !engine.should_quit() {
        if !engine.process_next().await {
            return Err(Error::ChannelClosed);
        }
    }
    Ok(())
}

async fn connect<W: Write>(engine: &mut Engine, out: &mut W) -> Result<()> {
    if engine.state.session.connected {
        return Ok(());
    }

    engine.process_message(Message::ConnectWallet);
    while engine.state.session.loading && !engine.should_quit() {
        if !engine.process_next().await {
            return Err(Error::ChannelClosed);
        }
    }

    if engine.state.session.connected {
        HeadlessEvent::wallet_connected(engine.state.balance()).write_to(out)?;
    }
    Ok(())
}

/// How much of the console has already been written out
#[derive(Debug, Default)]
struct Transcript {
    emitted: usize,
    status: AgentStatus,
}

impl Transcript {
    /// Write console lines not yet emitted, then any status change
    fn flush<W: Write>(&mut self, engine: &Engine, out: &mut W) -> Result<()> {
        let console = &engine.state.console;

        for line in console.lines.iter().skip(self.emitted) {
            HeadlessEvent::console_line(line).write_to(out)?;
        }
        self.emitted = console.lines.len();

        if console.status != self.status {
            self.status = console.status;
            HeadlessEvent::status(console.status).write_to(out)?;
        }
        Ok(())
    }

    /// The console was replaced by the reset seed; emit it from the start
    fn rewind(&mut self) {
        self.emitted = 0;
    }
}
