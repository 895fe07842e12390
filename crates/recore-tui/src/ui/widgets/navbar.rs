//! Top navigation bar.
//!
//! Shows the theme-bound logo on the left, the account buttons and the
//! theme toggle on the right, and (when the menu is open) the navigation
//! links on a second row.

use crate::theme::{IconSet, Palette, LOGO, TOGGLE_ICON, TOGGLE_ICON_ASCII};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use recore_core::{IconMode, NavLink, Theme};

/// The navigation bar widget.
#[derive(Debug, Clone)]
pub struct Navbar<'a> {
    theme: Theme,
    icons: IconSet,
    menu_open: bool,
    selected_link: usize,
    links: &'a [NavLink],
}

impl<'a> Navbar<'a> {
    pub fn new(theme: Theme, icons: IconSet, links: &'a [NavLink]) -> Self {
        Self {
            theme,
            icons,
            menu_open: false,
            selected_link: 0,
            links,
        }
    }

    /// Show the navigation links row.
    #[must_use]
    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    /// Highlight the link at `index` in the open menu.
    #[must_use]
    pub fn selected_link(mut self, index: usize) -> Self {
        self.selected_link = index;
        self
    }

    fn toggle_glyph(&self) -> &'static str {
        match self.icons.mode() {
            IconMode::Unicode => TOGGLE_ICON.select(self.theme),
            IconMode::Ascii => TOGGLE_ICON_ASCII.select(self.theme),
        }
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let palette = Palette::for_theme(self.theme);

        // Fill the bar background.
        for y in area.y..area.y.saturating_add(area.height) {
            for x in area.x..area.x.saturating_add(area.width) {
                buf[(x, y)].set_char(' ').set_style(palette.bar());
            }
        }

        // Left side: logo and menu glyph.
        let left = Line::from(vec![
            Span::styled(format!(" {} ", LOGO.select(self.theme)), palette.title()),
            Span::styled(format!(" {} ", self.icons.menu()), palette.bar()),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        // Right side: account buttons and the theme toggle control.
        let right = Line::from(vec![
            Span::styled(" Crear cuenta ", palette.button_secondary(false)),
            Span::styled(" ", palette.bar()),
            Span::styled(" Iniciar sesión ", palette.button_primary(false)),
            Span::styled(" ", palette.bar()),
            Span::styled(format!(" {} ", self.toggle_glyph()), palette.highlight()),
            Span::styled(" ", palette.bar()),
        ]);
        #[allow(clippy::cast_possible_truncation)]
        let right_width = right.width() as u16;
        if right_width < area.width {
            buf.set_line(area.x + area.width - right_width, area.y, &right, right_width);
        }

        // Menu row: links, visible only while the menu is open.
        if self.menu_open && area.height >= 2 {
            let mut spans = vec![Span::styled("   ", palette.bar())];
            for (i, link) in self.links.iter().enumerate() {
                let style = if i == self.selected_link {
                    palette.highlight()
                } else {
                    palette.bar()
                };
                spans.push(Span::styled(format!(" {} ", link.label), style));
                spans.push(Span::styled("  ", palette.bar()));
            }
            buf.set_line(area.x, area.y + 1, &Line::from(spans), area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recore_core::NAV_LINKS;

    fn render_to_string(navbar: Navbar<'_>) -> String {
        let area = Rect::new(0, 0, 80, 2);
        let mut buf = Buffer::empty(area);
        navbar.render(area, &mut buf);

        let mut out = String::new();
        for y in 0..2 {
            for x in 0..80 {
                out.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_logo_follows_theme() {
        let light = render_to_string(Navbar::new(Theme::Light, IconSet::default(), &NAV_LINKS));
        assert!(light.contains("■ ReCore"));

        let dark = render_to_string(Navbar::new(Theme::Dark, IconSet::default(), &NAV_LINKS));
        assert!(dark.contains("□ ReCore"));
    }

    #[test]
    fn test_toggle_icon_advertises_other_mode() {
        let light = render_to_string(Navbar::new(Theme::Light, IconSet::default(), &NAV_LINKS));
        assert!(light.contains('☾'));

        let dark = render_to_string(Navbar::new(Theme::Dark, IconSet::default(), &NAV_LINKS));
        assert!(dark.contains('☀'));
    }

    #[test]
    fn test_menu_links_render_when_open() {
        let closed = render_to_string(Navbar::new(Theme::Light, IconSet::default(), &NAV_LINKS));
        assert!(!closed.contains("Productos"));

        let open = render_to_string(
            Navbar::new(Theme::Light, IconSet::default(), &NAV_LINKS).menu_open(true),
        );
        assert!(open.contains("Inicio"));
        assert!(open.contains("Productos"));
        assert!(open.contains("Crear Cuenta"));
    }
}
