//! Status bar widget.

use crate::theme::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use recore_core::Theme;
use unicode_width::UnicodeWidthStr;

/// A key hint for the status bar.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Status bar widget displayed at the bottom of the screen.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    mode: &'a str,
    theme: Theme,
    hints: Vec<KeyHint>,
    right_text: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar.
    pub fn new(mode: &'a str, theme: Theme) -> Self {
        Self {
            mode,
            theme,
            hints: Vec::new(),
            right_text: None,
        }
    }

    /// Add key hints.
    #[must_use]
    pub fn hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Set right-aligned text.
    #[must_use]
    pub fn right(mut self, text: &'a str) -> Self {
        self.right_text = Some(text);
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let palette = Palette::for_theme(self.theme);

        // Fill background with status bar color
        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)].set_char(' ').set_style(palette.status_bar());
        }

        // Build left side: mode + hints
        let mut spans = Vec::new();

        spans.push(Span::styled(format!(" {} ", self.mode), palette.key_hint()));
        spans.push(Span::styled(" ", palette.status_bar()));

        for hint in &self.hints {
            spans.push(Span::styled(format!(" {} ", hint.key), palette.key_hint()));
            spans.push(Span::styled(format!(" {} ", hint.label), palette.key_label()));
        }

        let left_line = Line::from(spans);
        buf.set_line(area.x, area.y, &left_line, area.width);

        // Right-aligned text
        if let Some(text) = self.right_text {
            #[allow(clippy::cast_possible_truncation)]
            let text_width = text.width() as u16;
            if text_width < area.width {
                let x = area.x + area.width - text_width - 1;
                buf.set_string(x, area.y, text, palette.notification());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_renders_hints_and_right_text() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new("Inicio", Theme::Light)
            .hints(vec![KeyHint::new("t", "Tema"), KeyHint::new("q", "Salir")])
            .right("tema: claro")
            .render(area, &mut buf);

        let mut out = String::new();
        for x in 0..80 {
            out.push_str(buf.cell((x, 0)).unwrap().symbol());
        }
        assert!(out.contains("Inicio"));
        assert!(out.contains("Tema"));
        assert!(out.contains("tema: claro"));
    }
}
