//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (title, route, service health)
    pub header: Rect,

    /// Screen content
    pub body: Rect,

    /// Single row of key hints
    pub footer: Rect,
}

/// Split the terminal into header, body, and key-hint footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
