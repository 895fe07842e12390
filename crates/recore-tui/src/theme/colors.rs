//! Catppuccin palettes for the two themes.
//!
//! Latte backs `Theme::Light`, Mocha backs `Theme::Dark`. Every style the
//! widgets use is derived from the palette of the theme active for the
//! current render pass, so a whole frame always draws in one mode.

use ratatui::style::{Color, Modifier, Style};
use recore_core::Theme;

/// Color palette for one theme.
#[derive(Debug, Clone)]
pub struct Palette {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,

    // Semantic
    pub warning: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Palette {
    /// Palette for the given theme: member 0 (`Light`) or 1 (`Dark`).
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::latte(),
            Theme::Dark => Self::mocha(),
        }
    }

    /// Catppuccin Latte (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            overlay: Color::Rgb(220, 224, 232), // #dce0e8

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253),  // #7287fd (lavender)
            secondary: Color::Rgb(23, 146, 153), // #179299 (teal)

            warning: Color::Rgb(223, 142, 29), // #df8e1d (yellow)

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd (lavender)
        }
    }

    /// Catppuccin Mocha (dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244
            overlay: Color::Rgb(69, 71, 90), // #45475a

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254),   // #b4befe (lavender)
            secondary: Color::Rgb(148, 226, 213), // #94e2d5 (teal)

            warning: Color::Rgb(249, 226, 175), // #f9e2af (yellow)

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }

    // === Derived styles ===

    /// Default text style.
    pub fn default_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.base)
    }

    /// Dimmed text for secondary information.
    pub fn dim(&self) -> Style {
        Style::default().fg(self.subtext).bg(self.base)
    }

    /// Highlighted/selected item.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.base)
            .add_modifier(Modifier::BOLD)
    }

    /// Title style.
    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Notification text in the status bar.
    pub fn notification(&self) -> Style {
        Style::default().fg(self.warning).bg(self.overlay)
    }

    /// Border style for inactive elements.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style for active/focused elements.
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Primary (filled) button.
    pub fn button_primary(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.base).bg(self.primary);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Secondary (outlined) button.
    pub fn button_secondary(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.primary).bg(self.surface);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Key hint style (for the status bar).
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.base)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style.
    pub fn key_label(&self) -> Style {
        Style::default().fg(self.text).bg(self.overlay)
    }

    /// Status bar background style.
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.overlay)
    }

    /// Bar background (navbar and footer surface).
    pub fn bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_theme_selects_latte_for_light() {
        let palette = Palette::for_theme(Theme::Light);
        assert!(matches!(palette.base, Color::Rgb(239, 241, 245)));
    }

    #[test]
    fn test_for_theme_selects_mocha_for_dark() {
        let palette = Palette::for_theme(Theme::Dark);
        assert!(matches!(palette.base, Color::Rgb(30, 30, 46)));
    }
}
