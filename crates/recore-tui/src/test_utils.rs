//! Test utilities for recore-tui rendering and integration testing.
//!
//! Helpers for creating test terminals, rendering screens, and converting
//! buffers to strings for content assertions.

use crate::app::{App, Page};
use crate::screens::Screen as ScreenTrait;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use recore_core::Config;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app with default config.
pub fn create_test_app() -> App {
    App::new(&Config::default())
}

/// Create a test app positioned at a specific page.
pub fn create_test_app_at_page(page: Page) -> App {
    let mut app = create_test_app();
    app.page = page;
    app
}

/// Convert a buffer to a string representation for content assertions.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a screen to a buffer and return it as a string.
pub fn render_screen_to_string<S: ScreenTrait>(screen: &S, app: &App) -> String {
    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    let mut buffer = Buffer::empty(area);
    screen.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(app.page, Page::Home);
        assert_eq!(app.categories.len(), 4);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hola", ratatui::style::Style::default());
        buffer.set_string(0, 1, "Mundo", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hola"));
        assert!(result.contains("Mundo"));
    }
}
