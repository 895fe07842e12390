//! Button widgets for the login form.

use crate::theme::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use recore_core::Theme;

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled accent button.
    Primary,
    /// Outlined/flat button.
    Secondary,
}

/// A one-line button.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    icon: Option<&'static str>,
    kind: ButtonKind,
    focused: bool,
    theme: Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, kind: ButtonKind, theme: Theme) -> Self {
        Self {
            label,
            icon: None,
            kind,
            focused: false,
            theme,
        }
    }

    /// Add a trailing icon glyph.
    #[must_use]
    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let palette = Palette::for_theme(self.theme);
        let style = match self.kind {
            ButtonKind::Primary => palette.button_primary(self.focused),
            ButtonKind::Secondary => palette.button_secondary(self.focused),
        };

        let text = match self.icon {
            Some(icon) => format!(" {} {icon} ", self.label),
            None => format!(" {} ", self.label),
        };

        Paragraph::new(Line::from(Span::styled(text, style)))
            .centered()
            .render(area, buf);
    }
}
