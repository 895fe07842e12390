//! Theme-bound asset pairs.
//!
//! Each themed visual element pre-binds exactly two variants, one per
//! theme. Selection is a pure mapping from the current theme to a pair
//! member and happens on every render pass.

use recore_core::Theme;

/// A pair of asset variants: member 0 for `Light`, member 1 for `Dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetPair {
    variants: [&'static str; 2],
}

impl AssetPair {
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self {
            variants: [light, dark],
        }
    }

    /// Variant to display under `theme`.
    pub fn select(&self, theme: Theme) -> &'static str {
        self.variants[theme.index()]
    }
}

/// Company logo, as it appears in the navbar and footer.
/// Light mode uses the black-logo variant, dark mode the white one.
pub const LOGO: AssetPair = AssetPair::new("■ ReCore", "□ ReCore");

/// Theme toggle icon. Shows the mode a click would switch *to*, matching
/// the original art (night icon while in light mode and vice versa).
pub const TOGGLE_ICON: AssetPair = AssetPair::new("☾", "☀");

/// ASCII variant of the toggle icon.
pub const TOGGLE_ICON_ASCII: AssetPair = AssetPair::new("(n)", "(d)");

/// Placeholder image glyph for catalog cards.
pub const CARD_IMAGE: AssetPair = AssetPair::new("▦", "▩");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_maps_theme_to_member() {
        let pair = AssetPair::new("logo_light", "logo_dark");
        assert_eq!(pair.select(Theme::Light), "logo_light");
        assert_eq!(pair.select(Theme::Dark), "logo_dark");
    }

    #[test]
    fn test_logo_variants_differ() {
        assert_ne!(LOGO.select(Theme::Light), LOGO.select(Theme::Dark));
    }

    #[test]
    fn test_toggle_icon_is_inverted() {
        // In light mode the control advertises dark mode.
        assert_eq!(TOGGLE_ICON.select(Theme::Light), "☾");
        assert_eq!(TOGGLE_ICON.select(Theme::Dark), "☀");
    }
}
