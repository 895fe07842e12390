//! Headless mode for the recore TUI.
//!
//! This module provides a way to run the TUI without a real terminal,
//! enabling E2E testing and automation. Actions are sent via channels
//! and screen state is captured after each render.

use crate::app::{App, Page};
use crate::event::Action;
use crate::screens;
use crate::screens::Screen as ScreenTrait;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use recore_core::{Config, Theme};
use tokio::sync::{mpsc, watch};

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone)]
pub struct HeadlessState {
    /// Current page being displayed.
    pub page: Page,
    /// Active theme at the time of the render.
    pub theme: Theme,
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the TUI should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
}

impl Default for HeadlessState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            theme: Theme::Light,
            screen_contents: String::new(),
            should_quit: false,
            show_help: false,
        }
    }
}

/// Handle to control a headless TUI instance.
///
/// Use this to send actions and observe state changes.
pub struct HeadlessHandle {
    action_tx: mpsc::UnboundedSender<Action>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.action_tx.send(action).is_ok()
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait for the state to change, with a timeout.
    ///
    /// Returns `true` if state changed, `false` if timed out.
    pub async fn wait_for_change(&mut self, timeout: std::time::Duration) -> bool {
        tokio::time::timeout(timeout, self.state_rx.changed())
            .await
            .is_ok()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(
        &mut self,
        condition: F,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            if tokio::time::timeout(remaining, self.state_rx.changed())
                .await
                .is_err()
            {
                return None;
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(
        &mut self,
        text: &str,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        let text = text.to_string();
        self.wait_for(|s| s.screen_contents.contains(&text), timeout)
            .await
    }

    /// Wait for a specific page to be displayed.
    pub async fn wait_for_page(
        &mut self,
        page: Page,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        self.wait_for(|s| s.page == page, timeout).await
    }

    /// Wait for a specific theme to be active.
    pub async fn wait_for_theme(
        &mut self,
        theme: Theme,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        self.wait_for(|s| s.theme == theme, timeout).await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50, // Faster tick rate for testing
        }
    }
}

/// Run the TUI in headless mode.
///
/// Returns a handle to control the TUI and a join handle for the background
/// thread. The app state is single-threaded, so the loop runs on its own
/// thread with a current-thread runtime rather than a spawned tokio task.
///
/// # Example
///
/// ```ignore
/// let (handle, task) = run_tui_headless(&Config::default(), HeadlessConfig::default());
///
/// // Send actions
/// handle.send_action(Action::ToggleTheme);
///
/// // Wait for state changes
/// let state = handle.wait_for_theme(Theme::Dark, Duration::from_secs(1)).await;
///
/// // Quit
/// handle.send_action(Action::Quit);
/// task.join().unwrap().unwrap();
/// ```
pub fn run_tui_headless(
    config: &Config,
    headless: HeadlessConfig,
) -> (HeadlessHandle, std::thread::JoinHandle<Result<(), String>>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let config = config.clone();

    let task = std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| e.to_string())?;
        runtime
            .block_on(run_headless_loop(&config, headless, action_rx, state_tx))
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle {
        action_tx,
        state_rx,
    };

    (handle, task)
}

async fn run_headless_loop(
    config: &Config,
    headless: HeadlessConfig,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create test backend
    let backend = TestBackend::new(headless.width, headless.height);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(config);

    let tick_duration = std::time::Duration::from_millis(headless.tick_rate_ms);

    loop {
        // Draw
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            match app.page {
                Page::Home => {
                    screens::home::HomeScreen.render(&app, area, buf);
                }
                Page::Login => {
                    screens::login::LoginScreen.render(&app, area, buf);
                }
            }

            // Render help overlay if visible
            if app.show_help {
                screens::render_help_overlay(app.theme(), area, buf);
            }
        })?;

        // Capture screen contents
        let screen_contents = buffer_to_string(terminal.backend().buffer());

        // Update state
        let _ = state_tx.send(HeadlessState {
            page: app.page,
            theme: app.theme(),
            screen_contents,
            should_quit: app.should_quit,
            show_help: app.show_help,
        });

        // Check for quit
        if app.should_quit {
            break;
        }

        // Wait for action or tick
        let action = tokio::select! {
            Some(action) = action_rx.recv() => action,
            () = tokio::time::sleep(tick_duration) => {
                app.tick();
                Action::None
            }
        };

        // Handle action
        if action != Action::None {
            app.handle_action(action);
        }
    }

    Ok(())
}

/// Convert a terminal buffer to a string representation.
fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_state_default() {
        let state = HeadlessState::default();
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.should_quit);
        assert!(!state.show_help);
        assert!(state.screen_contents.is_empty());
    }

    #[test]
    fn test_headless_config_default() {
        let config = HeadlessConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[test]
    fn test_buffer_to_string() {
        use ratatui::buffer::Buffer;
        use ratatui::layout::Rect;
        use ratatui::style::Style;

        let area = Rect::new(0, 0, 10, 2);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hola", Style::default());
        buffer.set_string(0, 1, "Mundo", Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hola"));
        assert!(result.contains("Mundo"));
    }

    #[tokio::test]
    async fn test_headless_theme_toggle_flow() {
        let timeout = std::time::Duration::from_secs(2);
        let (mut handle, task) =
            run_tui_headless(&Config::default(), HeadlessConfig::default());

        // Home renders with the light logo first.
        let state = handle.wait_for_text("■ ReCore", timeout).await;
        assert!(state.is_some());
        assert_eq!(state.map(|s| s.theme), Some(Theme::Light));

        // Toggling repaints every themed region in the same pass.
        handle.send_action(Action::ToggleTheme);
        let state = handle.wait_for_theme(Theme::Dark, timeout).await;
        let state = state.expect("theme should flip to dark");
        assert!(state.screen_contents.contains("□ ReCore"));
        assert!(!state.screen_contents.contains("■ ReCore"));

        // Navigate to login, then quit.
        handle.send_action(Action::Page(1));
        let state = handle.wait_for_page(Page::Login, timeout).await;
        let state = state.expect("should reach login page");
        assert!(state.screen_contents.contains("Bienvenido!"));
        assert_eq!(state.theme, Theme::Dark);

        handle.send_action(Action::Quit);
        let quit = handle.wait_for(|s| s.should_quit, timeout).await;
        assert!(quit.is_some());
        task.join().expect("headless thread").expect("headless loop");
    }
}
