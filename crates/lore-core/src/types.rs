//! Core domain types shared by the app and TUI crates

use serde::Serialize;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────

/// The five mutually exclusive panels of the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Features,
    Dashboard,
    Agent,
    Docs,
}

impl Tab {
    /// Navigation order, as shown in the header
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Features,
        Tab::Dashboard,
        Tab::Agent,
        Tab::Docs,
    ];

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Features => "Features",
            Tab::Dashboard => "Dashboard",
            Tab::Agent => "Agent Console",
            Tab::Docs => "Documentation",
        }
    }

    /// 0-based position in [`Tab::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Features => 1,
            Tab::Dashboard => 2,
            Tab::Agent => 3,
            Tab::Docs => 4,
        }
    }

    /// Tab at a 0-based position, if any
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────
// Console
// ─────────────────────────────────────────────────────────────────

/// Who produced a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    System,
    User,
    Agent,
}

/// One entry of the agent console transcript. No identity beyond position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleLine {
    pub kind: LineKind,
    pub text: String,
}

impl ConsoleLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(LineKind::System, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(LineKind::User, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(LineKind::Agent, text)
    }
}

/// Agent status indicator shown next to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AgentStatus {
    #[default]
    Ready,
    Processing,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Ready => "Ready",
            AgentStatus::Processing => "Processing",
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, AgentStatus::Processing)
    }
}
