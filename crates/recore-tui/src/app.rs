//! Application state and update logic for the recore TUI.

use crate::event::Action;
use crate::theme::IconSet;
use crate::ui::widgets::TextInputState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use recore_core::{
    sample_articles, sample_categories, Article, Category, Config, NavLink, Theme, ThemeStore,
    NAV_LINKS,
};
use std::rc::Rc;
use tracing::debug;

/// Ticks a notification stays visible (3s at the 4 Hz tick rate).
const NOTIFICATION_TICKS: usize = 12;

/// The current page being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
}

/// Focusable element on the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    User,
    Password,
    Submit,
    Register,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            Self::User => Self::Password,
            Self::Password => Self::Submit,
            Self::Submit => Self::Register,
            Self::Register => Self::User,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::User => Self::Register,
            Self::Password => Self::User,
            Self::Submit => Self::Password,
            Self::Register => Self::Submit,
        }
    }

    /// Whether this field accepts text input.
    pub fn is_input(self) -> bool {
        matches!(self, Self::User | Self::Password)
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Current page.
    pub page: Page,

    /// Shared theme store for this page tree. Created at mount, dropped
    /// with the tree, never persisted.
    theme_store: Rc<ThemeStore>,

    /// Icon glyphs per the configured mode.
    pub icons: IconSet,

    /// Navbar menu entries.
    pub links: &'static [NavLink],

    /// Whether the navbar menu is open.
    pub menu_open: bool,

    /// Selected entry in the open menu.
    pub selected_link: usize,

    /// Search input state (home page).
    pub search_input: TextInputState,

    /// Whether the search input captures keystrokes.
    pub search_focused: bool,

    /// Login form: user name input.
    pub user_input: TextInputState,

    /// Login form: password input.
    pub password_input: TextInputState,

    /// Focused element on the login page.
    pub login_field: LoginField,

    /// Catalog content for the home page.
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,

    /// Notification message (displayed temporarily in the status bar).
    pub notification: Option<String>,

    /// Ticks remaining until the notification is cleared.
    notification_ttl: usize,

    /// Tick counter.
    pub tick: usize,
}

impl App {
    /// Create the app, mounting a fresh theme store seeded from config.
    pub fn new(config: &Config) -> Self {
        let theme_store = Rc::new(ThemeStore::new(config.initial_theme));
        theme_store.subscribe(|theme| debug!(%theme, "theme propagated to page tree"));

        Self {
            should_quit: false,
            show_help: false,
            page: Page::Home,
            theme_store,
            icons: IconSet::new(config.icon_mode),
            links: &NAV_LINKS,
            menu_open: false,
            selected_link: 0,
            search_input: TextInputState::new(),
            search_focused: false,
            user_input: TextInputState::new(),
            password_input: TextInputState::new(),
            login_field: LoginField::default(),
            categories: sample_categories(),
            articles: sample_articles(),
            notification: None,
            notification_ttl: 0,
            tick: 0,
        }
    }

    /// The theme active for the next render pass.
    pub fn theme(&self) -> Theme {
        self.theme_store.get()
    }

    /// The page tree's theme store.
    pub fn theme_store(&self) -> &ThemeStore {
        &self.theme_store
    }

    /// Advance animations and expire notifications.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Show a transient status bar message.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    /// Apply a UI action.
    pub fn handle_action(&mut self, action: Action) {
        // An open help overlay swallows the next action.
        if self.show_help {
            if action != Action::None {
                self.show_help = false;
            }
            return;
        }

        match action {
            Action::Help => self.show_help = true,
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.theme_store.toggle(),
            Action::ToggleMenu => {
                self.menu_open = !self.menu_open;
                self.selected_link = 0;
            }
            Action::FocusSearch => {
                if self.page == Page::Home {
                    self.search_focused = true;
                }
            }
            Action::Back => self.back(),
            Action::Up => self.move_up(),
            Action::Down => self.move_down(),
            Action::NextField => {
                if self.page == Page::Login {
                    self.login_field = self.login_field.next();
                }
            }
            Action::PrevField => {
                if self.page == Page::Login {
                    self.login_field = self.login_field.prev();
                }
            }
            Action::Select => self.select(),
            Action::Page(0) => self.go_to(Page::Home),
            Action::Page(_) => self.go_to(Page::Login),
            Action::None => {}
        }
    }

    /// Route a key to whichever text input currently captures keystrokes.
    /// Returns true if the key was consumed.
    pub fn handle_text_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        if self.page == Page::Home && self.search_focused {
            if key.code == KeyCode::Enter {
                self.submit_search();
                return true;
            }
            return Self::edit_input(&mut self.search_input, key);
        }

        if self.page == Page::Login && self.login_field.is_input() {
            let input = match self.login_field {
                LoginField::User => &mut self.user_input,
                LoginField::Password => &mut self.password_input,
                LoginField::Submit | LoginField::Register => return false,
            };
            return Self::edit_input(input, key);
        }

        false
    }

    fn edit_input(input: &mut TextInputState, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => return false,
        }
        true
    }

    /// Navigate by link target. `/` and `/login` map to the two pages;
    /// anything else belongs to the host router and only surfaces a note.
    pub fn navigate(&mut self, target: &str) {
        debug!(target, "navigate");
        match target {
            "/" => self.go_to(Page::Home),
            "/login" => self.go_to(Page::Login),
            other => self.notify(format!("Sin vista para {other}")),
        }
    }

    fn go_to(&mut self, page: Page) {
        self.page = page;
        self.search_focused = false;
        self.login_field = LoginField::default();
    }

    fn back(&mut self) {
        if self.search_focused {
            self.search_focused = false;
        } else if self.menu_open {
            self.menu_open = false;
        } else if self.page == Page::Login {
            self.go_to(Page::Home);
        } else {
            self.should_quit = true;
        }
    }

    fn move_up(&mut self) {
        if self.menu_open {
            self.selected_link = self.selected_link.saturating_sub(1);
        } else if self.page == Page::Login {
            self.login_field = self.login_field.prev();
        }
    }

    fn move_down(&mut self) {
        if self.menu_open {
            if self.selected_link + 1 < self.links.len() {
                self.selected_link += 1;
            }
        } else if self.page == Page::Login {
            self.login_field = self.login_field.next();
        }
    }

    fn select(&mut self) {
        if self.menu_open {
            let target = self.links[self.selected_link].target;
            self.menu_open = false;
            self.navigate(target);
            return;
        }

        if self.page == Page::Login {
            match self.login_field {
                // Enter moves through the form like Tab.
                LoginField::User | LoginField::Password => {
                    self.login_field = self.login_field.next();
                }
                LoginField::Submit => {
                    self.notify("Inicio de sesión no disponible en la demo");
                }
                LoginField::Register => self.navigate("/registro"),
            }
        }
    }

    fn submit_search(&mut self) {
        let query = self.search_input.take();
        self.search_focused = false;
        if query.trim().is_empty() {
            return;
        }
        self.notify(format!("Búsqueda no disponible en la demo: \"{query}\""));
    }
}
