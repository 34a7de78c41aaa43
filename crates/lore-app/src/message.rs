//! Message types for the application (TEA pattern)

use crate::console::ReplyTicket;
use crate::input_key::InputKey;
use lore_core::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (cursor blink)
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Show a specific panel
    SelectTab(Tab),
    /// Cycle to the next panel (Tab)
    NextTab,
    /// Cycle to the previous panel (Shift+Tab)
    PreviousTab,

    // ─────────────────────────────────────────────────────────
    // Wallet
    // ─────────────────────────────────────────────────────────
    /// Start the simulated wallet connection
    ConnectWallet,
    /// Simulated connection finished (from background task)
    WalletConnected,

    // ─────────────────────────────────────────────────────────
    // Agent console
    // ─────────────────────────────────────────────────────────
    /// Append a character to the command input
    InputChar(char),
    /// Remove the last character of the command input
    InputBackspace,
    /// Clear the command input
    ClearInput,
    /// Submit the current command input
    SubmitInput,
    /// Submit an arbitrary command (example commands, headless mode)
    SubmitCommand(String),
    /// Move the example-command highlight down
    NextExample,
    /// Move the example-command highlight up
    PreviousExample,
    /// Submit the highlighted example command
    RunSelectedExample,
    /// Delayed reply is due (from background task)
    ReplyDue { ticket: ReplyTicket },
    /// Replace the transcript with the reset seed
    ResetConsole,

    // ─────────────────────────────────────────────────────────
    // Settings toggles
    // ─────────────────────────────────────────────────────────
    ToggleTransactionApproval,
    ToggleNotifications,
    ToggleAdvancedMode,
    /// Advance the cosmetic transaction-limit selector
    CycleTransactionLimit,

    // ─────────────────────────────────────────────────────────
    // Decorative
    // ─────────────────────────────────────────────────────────
    /// Show/hide the profile card overlay
    ToggleProfile,
    /// The profile card's update button (cue only)
    UpdateProfile,
    /// Open the social link in a browser
    OpenSocialLink,
    /// Play the interaction feedback cue
    PlayCue,
}
