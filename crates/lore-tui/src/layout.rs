//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title/nav row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Footer: top border + links row + key hint row + bottom border
pub const FOOTER_HEIGHT: u16 = 4;

/// Screen areas for the tabbed layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,

    /// Active panel
    pub body: Rect,

    pub footer: Rect,
}

/// Split the screen into header, panel and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Console areas: transcript on the left, sidebar (examples + configuration)
/// on the right
#[derive(Debug, Clone, Copy)]
pub struct ConsoleAreas {
    pub terminal: Rect,
    pub examples: Rect,
    pub config: Rect,
}

/// Width at or below which the sidebar is dropped
pub const NARROW_WIDTH: u16 = 60;

pub fn console(area: Rect) -> ConsoleAreas {
    if area.width <= NARROW_WIDTH {
        let empty = Rect::new(area.x, area.y, 0, 0);
        return ConsoleAreas {
            terminal: area,
            examples: empty,
            config: empty,
        };
    }

    let [terminal, sidebar] =
        Layout::horizontal([Constraint::Percentage(66), Constraint::Percentage(34)]).areas(area);
    let [examples, config] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(6)]).areas(sidebar);

    ConsoleAreas {
        terminal,
        examples,
        config,
    }
}

/// Center a fixed-size rect within an area, clamped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.body.y, HEADER_HEIGHT);
        assert_eq!(layout.body.height, 24 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_console_sidebar_on_wide_screens() {
        let areas = console(Rect::new(0, 0, 100, 20));
        assert!(areas.examples.width > 0);
        assert_eq!(areas.terminal.width + areas.examples.width, 100);
        assert_eq!(areas.examples.x, areas.config.x);
    }

    #[test]
    fn test_console_narrow_drops_sidebar() {
        let area = Rect::new(0, 0, 50, 20);
        let areas = console(area);
        assert_eq!(areas.terminal, area);
        assert!(areas.examples.is_empty());
        assert!(areas.config.is_empty());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(100, 50, area), area);
    }
}
