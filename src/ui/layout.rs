//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar on the left, form on the right, status bar along the bottom.
pub struct AppLayout {
    pub nav_area: Rect,
    pub form_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, nav_width: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // panes
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(nav_width), Constraint::Min(10)])
            .split(rows[0]);

        Self {
            nav_area: panes[0],
            form_area: panes[1],
            status_area: rows[1],
        }
    }
}

/// Index of the bordered-list row under `row`, if it falls inside the
/// block's content area.
pub fn row_in_block(area: Rect, row: u16, offset: usize) -> Option<usize> {
    let top = area.y.saturating_add(1);
    let bottom = area.y.saturating_add(area.height.saturating_sub(1));
    if row < top || row >= bottom {
        return None;
    }
    Some((row - top) as usize + offset)
}

pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
