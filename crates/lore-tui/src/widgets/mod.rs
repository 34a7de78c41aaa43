//! Custom widget components

mod console;
mod dashboard;
mod docs;
mod features;
mod footer;
mod header;
mod home;
mod profile_card;

pub use console::{wrap_text, AgentConsole, ConsoleConfig, ExampleCommands};
pub use dashboard::DashboardPanel;
pub use docs::DocsPanel;
pub use features::FeaturesPanel;
pub use footer::Footer;
pub use header::MainHeader;
pub use home::HomePanel;
pub use profile_card::ProfileCard;
