//! Layout helpers for the recore TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rect with the given percentage of the parent.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Page chrome: navbar on top, footer above the status bar, body between.
pub struct PageAreas {
    pub navbar: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the full frame into the shared page chrome.
pub fn page_layout(area: Rect) -> PageAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    PageAreas {
        navbar: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout_covers_frame() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = page_layout(area);
        assert_eq!(areas.navbar.height, 2);
        assert_eq!(areas.footer.height, 3);
        assert_eq!(areas.status.height, 1);
        let total =
            areas.navbar.height + areas.body.height + areas.footer.height + areas.status.height;
        assert_eq!(total, 24);
    }

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = centered_fixed(40, 20, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
