//! Application state (Model in TEA pattern)

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;
use crate::console::ConsoleState;
use lore_core::{catalog, AppPhase, Tab};

/// View-level session state. Lives for one run and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active_tab: Tab,

    /// Simulated wallet is connected
    pub connected: bool,

    /// Simulated wallet connection in flight
    pub loading: bool,

    /// Full-screen console variant of the Agent tab
    pub advanced_mode: bool,

    pub transaction_approval: bool,

    pub notifications: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Home,
            connected: false,
            loading: false,
            advanced_mode: false,
            transaction_approval: false,
            notifications: true,
        }
    }
}

impl SessionState {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Mark the wallet as connecting. Returns false if already connecting
    /// or connected, in which case nothing changes.
    pub fn begin_connect(&mut self) -> bool {
        if self.connected || self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_connect(&mut self) {
        self.connected = true;
        self.loading = false;
    }

    pub fn toggle_transaction_approval(&mut self) {
        self.transaction_approval = !self.transaction_approval;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    pub fn toggle_advanced_mode(&mut self) {
        self.advanced_mode = !self.advanced_mode;
    }

    /// Advanced mode replaces the tabbed layout only while on the Agent tab
    pub fn is_fullscreen_console(&self) -> bool {
        self.advanced_mode && self.active_tab == Tab::Agent
    }
}

/// Complete application state (the Model)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    pub session: SessionState,

    pub console: ConsoleState,

    /// Loaded settings (delays, balance, links, feedback)
    pub settings: Settings,

    /// Profile card overlay visible
    pub show_profile: bool,

    /// Index into [`catalog::TRANSACTION_LIMITS`]
    pub transaction_limit: usize,

    /// Ticks since start, drives the processing cursor blink
    pub tick: u64,

    /// Source of every cosmetic random number
    pub rng: StdRng,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state from settings. The RNG is seeded from `console.seed`
    /// when present, otherwise from entropy.
    pub fn with_settings(settings: Settings) -> Self {
        let rng = match settings.console.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            phase: AppPhase::Running,
            session: SessionState::default(),
            console: ConsoleState::new(),
            settings,
            show_profile: false,
            transaction_limit: 0,
            tick: 0,
            rng,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Displayed SOL balance
    pub fn balance(&self) -> &str {
        &self.settings.wallet.balance
    }

    pub fn transaction_limit_label(&self) -> &'static str {
        catalog::TRANSACTION_LIMITS[self.transaction_limit]
    }

    pub fn cycle_transaction_limit(&mut self) {
        self.transaction_limit = (self.transaction_limit + 1) % catalog::TRANSACTION_LIMITS.len();
    }

    pub fn toggle_profile(&mut self) {
        self.show_profile = !self.show_profile;
    }

    /// Whether keystrokes go into the console input
    pub fn is_console_focused(&self) -> bool {
        self.session.active_tab == Tab::Agent && !self.show_profile
    }
}
