//! Login page: navbar, centered login box, footer.

use crate::app::{App, LoginField};
use crate::screens::Screen;
use crate::theme::Palette;
use crate::ui::widgets::{Button, ButtonKind, Footer, KeyHint, Navbar, StatusBar, TextInput};
use crate::ui::{centered_fixed, page_layout};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The login page screen.
pub struct LoginScreen;

impl Screen for LoginScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let theme = app.theme();
        let palette = Palette::for_theme(theme);
        let areas = page_layout(area);

        for y in areas.body.y..areas.body.y.saturating_add(areas.body.height) {
            for x in areas.body.x..areas.body.x.saturating_add(areas.body.width) {
                buf[(x, y)].set_char(' ').set_style(palette.default_style());
            }
        }

        Navbar::new(theme, app.icons, app.links)
            .menu_open(app.menu_open)
            .selected_link(app.selected_link)
            .render(areas.navbar, buf);

        render_login_box(app, areas.body, buf);

        Footer::new(theme, app.icons).render(areas.footer, buf);

        let hints = vec![
            KeyHint::new("t", "Tema"),
            KeyHint::new("Tab", "Campo"),
            KeyHint::new("Enter", "Aceptar"),
            KeyHint::new("Esc", "Volver"),
            KeyHint::new("q", "Salir"),
        ];
        let right_text = app
            .notification
            .clone()
            .unwrap_or_else(|| format!("tema: {theme}"));
        StatusBar::new("Iniciar sesión", theme)
            .hints(hints)
            .right(&right_text)
            .render(areas.status, buf);
    }
}

fn render_login_box(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = app.theme();
    let palette = Palette::for_theme(theme);

    let box_area = centered_fixed(46, 13, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_focused_style())
        .style(palette.default_style());
    let inner = block.inner(box_area);
    block.render(box_area, buf);

    if inner.height < 11 || inner.width < 10 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Bienvenido!
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Length(1), // Usuario label
            Constraint::Length(1), // user input
            Constraint::Length(1), // Contraseña label
            Constraint::Length(1), // password input
            Constraint::Length(1),
            Constraint::Length(1), // buttons
            Constraint::Min(0),
        ])
        .split(inner);

    Paragraph::new(Line::from("Bienvenido!"))
        .style(palette.title())
        .centered()
        .render(rows[0], buf);
    Paragraph::new(Line::from("Por favor ingrese sus datos"))
        .style(palette.dim())
        .centered()
        .render(rows[1], buf);

    Paragraph::new(Line::from("Usuario"))
        .style(palette.dim())
        .render(rows[3], buf);
    TextInput::from_state(&app.user_input, theme)
        .placeholder("EJ: Pepito")
        .focused(app.login_field == LoginField::User)
        .render(rows[4], buf);

    Paragraph::new(Line::from("Contraseña"))
        .style(palette.dim())
        .render(rows[5], buf);
    TextInput::from_state(&app.password_input, theme)
        .placeholder("EJ: ********")
        .masked(true)
        .focused(app.login_field == LoginField::Password)
        .render(rows[6], buf);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[8]);

    Button::new("Iniciar sesión", ButtonKind::Primary, theme)
        .icon(app.icons.login())
        .focused(app.login_field == LoginField::Submit)
        .render(buttons[0], buf);
    Button::new("Registrarse", ButtonKind::Secondary, theme)
        .focused(app.login_field == LoginField::Register)
        .render(buttons[1], buf);
}
