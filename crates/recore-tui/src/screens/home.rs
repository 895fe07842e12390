//! Home page: navbar, search section, category and article grids, footer.

use crate::app::App;
use crate::screens::Screen;
use crate::theme::Palette;
use crate::ui::widgets::{Card, CardGrid, Footer, KeyHint, Navbar, SearchBar, StatusBar};
use crate::ui::{centered_rect, page_layout};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use recore_core::{ARTICLES_TITLE, CATEGORIES_TITLE};

/// The home page screen.
pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        // One theme read per pass; every widget below sees this value.
        let theme = app.theme();
        let palette = Palette::for_theme(theme);
        let areas = page_layout(area);

        // Page background.
        for y in areas.body.y..areas.body.y.saturating_add(areas.body.height) {
            for x in areas.body.x..areas.body.x.saturating_add(areas.body.width) {
                buf[(x, y)].set_char(' ').set_style(palette.default_style());
            }
        }

        Navbar::new(theme, app.icons, app.links)
            .menu_open(app.menu_open)
            .selected_link(app.selected_link)
            .render(areas.navbar, buf);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5), Constraint::Min(5)])
            .split(areas.body);

        let search_area = centered_rect(70, 100, sections[0]);
        SearchBar::new(theme, app.icons, &app.search_input)
            .focused(app.search_focused)
            .render(search_area, buf);

        let categories: Vec<Card> = app.categories.iter().map(Card::from).collect();
        CardGrid::new(theme, CATEGORIES_TITLE, categories).render(sections[1], buf);

        let articles: Vec<Card> = app.articles.iter().map(Card::from).collect();
        CardGrid::new(theme, ARTICLES_TITLE, articles).render(sections[2], buf);

        Footer::new(theme, app.icons).render(areas.footer, buf);

        let hints = vec![
            KeyHint::new("t", "Tema"),
            KeyHint::new("m", "Menú"),
            KeyHint::new("/", "Buscar"),
            KeyHint::new("2", "Login"),
            KeyHint::new("?", "Ayuda"),
            KeyHint::new("q", "Salir"),
        ];
        let right_text = app
            .notification
            .clone()
            .unwrap_or_else(|| format!("tema: {theme}"));
        StatusBar::new("Inicio", theme)
            .hints(hints)
            .right(&right_text)
            .render(areas.status, buf);
    }
}
