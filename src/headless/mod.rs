//! Headless mode - scripted console driven from stdin, NDJSON on stdout
//!
//! Commands are read one per line. Each accepted command is awaited until
//! its reply lands, so the transcript on stdout is deterministic for a given
//! seed. Lines starting with `/` are meta commands (`/reset`, `/connect`,
//! `/quit`).
//!
//! # Event Format
//!
//! ```json
//! {"event":"console_line","kind":"user","text":"Swap 2 SOL for USDC","timestamp":1704700001000}
//! {"event":"status","status":"Processing","timestamp":1704700001000}
//! {"event":"wallet_connected","balance":"24.56","timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use lore_core::prelude::*;
use lore_core::{AgentStatus, ConsoleLine, LineKind};

pub use runner::{run_headless, run_script};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A line appended to the console transcript
    ConsoleLine {
        kind: LineKind,
        text: String,
        timestamp: i64,
    },

    /// The agent status changed
    Status { status: AgentStatus, timestamp: i64 },

    WalletConnected { balance: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn console_line(line: &ConsoleLine) -> Self {
        Self::ConsoleLine {
            kind: line.kind,
            text: line.text.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn status(status: AgentStatus) -> Self {
        Self::Status {
            status,
            timestamp: Self::now(),
        }
    }

    pub fn wallet_connected(balance: &str) -> Self {
        Self::WalletConnected {
            balance: balance.to_string(),
            timestamp: Self::now(),
        }
    }
}
