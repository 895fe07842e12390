//! Event handling for the recore TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else {
                    // No event, send tick
                    if tx_clone.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    /// Invert the theme (the toggle control).
    ToggleTheme,
    /// Open or close the navbar menu.
    ToggleMenu,
    /// Focus the home page search input.
    FocusSearch,
    Back,
    Select,
    Up,
    Down,
    NextField,
    PrevField,
    /// Jump directly to a page (1 = Home, 2 = Login).
    Page(usize),
    None,
}

/// Convert a key event to an action based on context.
pub fn key_to_action(key: KeyEvent) -> Action {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('m') => Action::ToggleMenu,
        KeyCode::Char('/') => Action::FocusSearch,
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::Select,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::BackTab => Action::PrevField,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Action::PrevField
            } else {
                Action::NextField
            }
        }
        KeyCode::Char('1') => Action::Page(0),
        KeyCode::Char('2') => Action::Page(1),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_toggle_theme_key() {
        assert_eq!(key_to_action(key(KeyCode::Char('t'))), Action::ToggleTheme);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut evt = key(KeyCode::Char('c'));
        evt.modifiers = KeyModifiers::CONTROL;
        assert_eq!(key_to_action(evt), Action::Quit);
    }

    #[test]
    fn test_page_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('1'))), Action::Page(0));
        assert_eq!(key_to_action(key(KeyCode::Char('2'))), Action::Page(1));
    }

    #[test]
    fn test_backtab_is_prev_field() {
        assert_eq!(key_to_action(key(KeyCode::BackTab)), Action::PrevField);
    }
}
