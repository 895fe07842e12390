//! recore-tui: Terminal front-end for the recore storefront
//!
//! This crate provides the TUI layer for recore, including:
//! - Home page with search, category and article grids
//! - Login page with a focusable form
//! - Shared widgets (navbar, footer, cards, inputs, buttons)
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod screens;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod ui;

use screens::Screen as ScreenTrait;

pub use app::{App, LoginField, Page};
pub use event::{Action, Event, EventHandler};
pub use recore_core;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use recore_core::Config;
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application, starting on the given page.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(config: &Config, page: Page) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(config);
    app.page = page;

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    // Main loop
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Draw
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            match app.page {
                Page::Home => {
                    screens::home::HomeScreen.render(app, area, buf);
                }
                Page::Login => {
                    screens::login::LoginScreen.render(app, area, buf);
                }
            }

            // Render help overlay if visible
            if app.show_help {
                screens::render_help_overlay(app.theme(), area, buf);
            }
        })?;

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    // Focused text inputs capture keystrokes first.
                    if !app.show_help && app.handle_text_key(key) {
                        continue;
                    }
                    let action = event::key_to_action(key);
                    app.handle_action(action);
                }
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => {
                            app.handle_action(Action::Up);
                        }
                        MouseEventKind::ScrollDown => {
                            app.handle_action(Action::Down);
                        }
                        _ => {}
                    }
                }
                Event::Tick => {
                    app.tick();
                }
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::test_utils::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use recore_core::Theme;

    #[test]
    fn test_home_screen_sections() {
        let app = create_test_app();
        let result = render_screen_to_string(&screens::home::HomeScreen, &app);

        assert!(result.contains("■ ReCore"));
        assert!(result.contains("Encuentra lo que buscas aquí!"));
        assert!(result.contains("Buscar..."));
        assert!(result.contains("Algunas de nuestras categorías"));
        assert!(result.contains("Algunos de nuestros artículos"));
        assert!(result.contains("Todos los derechos reservados"));
    }

    #[test]
    fn test_home_screen_catalog_entries() {
        let app = create_test_app();
        let result = render_screen_to_string(&screens::home::HomeScreen, &app);

        assert!(result.contains("Tecnología"));
        assert!(result.contains("Moda"));
        assert!(result.contains("Auriculares"));
        assert!(result.contains("Camiseta"));
    }

    #[test]
    fn test_login_screen_form() {
        let app = create_test_app_at_page(Page::Login);
        let result = render_screen_to_string(&screens::login::LoginScreen, &app);

        assert!(result.contains("Bienvenido!"));
        assert!(result.contains("Por favor ingrese sus datos"));
        assert!(result.contains("Usuario"));
        assert!(result.contains("Contraseña"));
        assert!(result.contains("EJ: Pepito"));
        assert!(result.contains("Iniciar sesión"));
        assert!(result.contains("Registrarse"));
    }

    #[test]
    fn test_login_screen_masks_password() {
        let mut app = create_test_app_at_page(Page::Login);
        app.password_input.insert_str("secreto");
        let result = render_screen_to_string(&screens::login::LoginScreen, &app);

        assert!(result.contains("*******"));
        assert!(!result.contains("secreto"));
    }

    #[test]
    fn test_toggle_repaints_navbar_and_footer_together() {
        let mut app = create_test_app();

        // Light pass: both themed regions show the light logo.
        let light = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert_eq!(light.matches("■ ReCore").count(), 2);
        assert!(!light.contains("□ ReCore"));

        app.handle_action(Action::ToggleTheme);

        // Dark pass: both flip in the same render, nothing mismatched.
        let dark = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert_eq!(dark.matches("□ ReCore").count(), 2);
        assert!(!dark.contains("■ ReCore"));
    }

    #[test]
    fn test_toggle_icon_shows_target_mode() {
        let mut app = create_test_app();

        // Light mode offers the moon (switch to dark).
        let light = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert!(light.contains('☾'));

        app.handle_action(Action::ToggleTheme);
        let dark = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert!(dark.contains('☀'));
    }

    #[test]
    fn test_theme_applies_on_login_screen_too() {
        let mut app = create_test_app_at_page(Page::Login);
        app.handle_action(Action::ToggleTheme);

        let result = render_screen_to_string(&screens::login::LoginScreen, &app);
        assert!(result.contains("□ ReCore"));
        assert!(!result.contains("■ ReCore"));
    }

    #[test]
    fn test_status_bar_shows_theme_name() {
        let mut app = create_test_app();
        let light = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert!(light.contains("tema: light"));

        app.handle_action(Action::ToggleTheme);
        let dark = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert!(dark.contains("tema: dark"));
    }

    #[test]
    fn test_navbar_menu_lists_links_when_open() {
        let mut app = create_test_app();
        app.handle_action(Action::ToggleMenu);

        let result = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert!(result.contains("Inicio"));
        assert!(result.contains("Productos"));
        assert!(result.contains("Crear Cuenta"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let app = create_test_app();
        let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
        let mut buffer = Buffer::empty(area);
        screens::home::HomeScreen.render(&app, area, &mut buffer);
        screens::render_help_overlay(Theme::Light, area, &mut buffer);

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Ayuda"));
        assert!(result.contains("Cambiar tema"));
    }

    #[test]
    fn test_notification_appears_in_status_bar() {
        let mut app = create_test_app();
        app.handle_action(Action::ToggleMenu);
        app.handle_action(Action::Down); // Productos
        app.handle_action(Action::Select);

        let result = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert!(result.contains("Sin vista para /productos"));
    }
}
