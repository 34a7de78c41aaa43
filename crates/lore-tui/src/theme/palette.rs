//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Rgb(17, 24, 39);
pub const POPUP_BG: Color = Color::Rgb(31, 41, 55);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(55, 65, 81);
pub const BORDER_ACTIVE: Color = Color::Rgb(34, 197, 94);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(74, 222, 128);
pub const ACCENT_SOFT: Color = Color::Rgb(134, 239, 172);
/// Foreground on an accent background
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175);
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(74, 222, 128);
pub const STATUS_RED: Color = Color::Rgb(248, 113, 113);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Console line prefixes ---
pub const PROMPT: Color = STATUS_YELLOW;
pub const AGENT_TAG: Color = Color::Rgb(34, 197, 94);
