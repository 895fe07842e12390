//! Page footer: theme-bound logo, rights notice, social icons.

use crate::theme::{IconSet, Palette, LOGO};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use recore_core::Theme;
use unicode_width::UnicodeWidthStr;

/// Rights notice shown next to the footer logo.
pub const RIGHTS_NOTICE: &str = "Todos los derechos reservados";

/// The footer widget.
#[derive(Debug, Clone)]
pub struct Footer {
    theme: Theme,
    icons: IconSet,
}

impl Footer {
    pub fn new(theme: Theme, icons: IconSet) -> Self {
        Self { theme, icons }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let palette = Palette::for_theme(self.theme);

        for y in area.y..area.y.saturating_add(area.height) {
            for x in area.x..area.x.saturating_add(area.width) {
                buf[(x, y)].set_char(' ').set_style(palette.bar());
            }
        }

        // Center content vertically when the footer has spare rows.
        let y = area.y + (area.height.saturating_sub(1)) / 2;

        let left = Line::from(vec![
            Span::styled(format!(" {} ", LOGO.select(self.theme)), palette.title()),
            Span::styled(format!(" {RIGHTS_NOTICE}"), palette.dim().bg(palette.surface)),
        ]);
        buf.set_line(area.x, y, &left, area.width);

        let social = format!(
            "{}  {}  {} ",
            self.icons.instagram(),
            self.icons.facebook(),
            self.icons.twitter()
        );
        #[allow(clippy::cast_possible_truncation)]
        let social_width = social.width() as u16;
        if social_width < area.width {
            buf.set_string(
                area.x + area.width - social_width,
                y,
                social,
                palette.bar(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(footer: Footer) -> String {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        footer.render(area, &mut buf);

        let mut out = String::new();
        for y in 0..3 {
            for x in 0..80 {
                out.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_footer_logo_follows_theme() {
        let light = render_to_string(Footer::new(Theme::Light, IconSet::default()));
        assert!(light.contains("■ ReCore"));

        let dark = render_to_string(Footer::new(Theme::Dark, IconSet::default()));
        assert!(dark.contains("□ ReCore"));
    }

    #[test]
    fn test_footer_has_notice_and_social_icons() {
        let out = render_to_string(Footer::new(Theme::Light, IconSet::default()));
        assert!(out.contains(RIGHTS_NOTICE));
        assert!(out.contains('◉'));
        assert!(out.contains('ⓕ'));
    }
}
