//! Card grid sections for categories and articles.

use crate::theme::{Palette, CARD_IMAGE};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use recore_core::{Article, Category, Theme};

/// One card: a name plus a short info line.
#[derive(Debug, Clone)]
pub struct Card {
    pub name: String,
    pub info: String,
}

impl From<&Category> for Card {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            info: c.info.clone(),
        }
    }
}

impl From<&Article> for Card {
    fn from(a: &Article) -> Self {
        Self {
            name: a.name.clone(),
            info: a.info.clone(),
        }
    }
}

/// A titled row of equally sized cards.
#[derive(Debug, Clone)]
pub struct CardGrid<'a> {
    theme: Theme,
    title: &'a str,
    cards: Vec<Card>,
}

impl<'a> CardGrid<'a> {
    pub fn new(theme: Theme, title: &'a str, cards: Vec<Card>) -> Self {
        Self {
            theme,
            title,
            cards,
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 || self.cards.is_empty() {
            return;
        }
        let palette = Palette::for_theme(self.theme);

        Paragraph::new(Line::from(self.title))
            .style(palette.title())
            .render(Rect::new(area.x, area.y, area.width, 1), buf);

        let row = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        let slots_count = u32::try_from(self.cards.len()).unwrap_or(1);
        let constraints: Vec<Constraint> = self
            .cards
            .iter()
            .map(|_| Constraint::Ratio(1, slots_count))
            .collect();
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(row);

        for (card, slot) in self.cards.iter().zip(slots.iter()) {
            render_card(card, self.theme, &palette, *slot, buf);
        }
    }
}

fn render_card(card: &Card, theme: Theme, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .style(palette.default_style());
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height < 1 || inner.width < 2 {
        return;
    }

    let mut lines = vec![
        Line::styled(CARD_IMAGE.select(theme).to_string(), palette.dim()),
        Line::styled(card.name.clone(), palette.highlight()),
    ];
    for wrapped in textwrap::wrap(&card.info, inner.width as usize) {
        lines.push(Line::styled(wrapped.into_owned(), palette.dim()));
    }

    Paragraph::new(lines).render(inner, buf);
}
