//! Home page search section.

use crate::theme::{IconSet, Palette};
use crate::ui::widgets::text_input::{TextInput, TextInputState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use recore_core::Theme;

/// Banner above the search input.
pub const SEARCH_TITLE: &str = "Encuentra lo que buscas aquí!";

/// The search bar widget.
#[derive(Debug, Clone)]
pub struct SearchBar<'a> {
    theme: Theme,
    icons: IconSet,
    state: &'a TextInputState,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(theme: Theme, icons: IconSet, state: &'a TextInputState) -> Self {
        Self {
            theme,
            icons,
            state,
            focused: false,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 {
            return;
        }
        let palette = Palette::for_theme(self.theme);

        // Title line, centered.
        let title = Paragraph::new(Line::from(SEARCH_TITLE))
            .style(palette.title())
            .centered();
        title.render(Rect::new(area.x, area.y, area.width, 1), buf);

        // Bordered input below.
        let border_style = if self.focused {
            palette.border_focused_style()
        } else {
            palette.border_style()
        };
        let block = Block::default()
            .title(format!(" {} Buscar ", self.icons.search()))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(palette.default_style());

        let input_area = Rect::new(area.x, area.y + 1, area.width, 3);
        TextInput::from_state(self.state, self.theme)
            .placeholder("Buscar...")
            .focused(self.focused)
            .block(block)
            .render(input_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_bar_shows_title_and_placeholder() {
        let state = TextInputState::new();
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        SearchBar::new(Theme::Light, IconSet::default(), &state).render(area, &mut buf);

        let mut out = String::new();
        for y in 0..4 {
            for x in 0..60 {
                out.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        assert!(out.contains("Encuentra lo que buscas"));
        assert!(out.contains("Buscar..."));
    }
}
