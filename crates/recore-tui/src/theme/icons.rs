//! Icon glyphs with a Unicode/ASCII fallback mode.

use recore_core::IconMode;

/// Icon set based on configured mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Navbar icons ===

    pub fn menu(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "≡",
            IconMode::Ascii => "=",
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "⌕",
            IconMode::Ascii => "*",
        }
    }

    pub fn login(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "↪",
            IconMode::Ascii => "->",
        }
    }

    // === Footer social icons ===

    pub fn instagram(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "◉",
            IconMode::Ascii => "[ig]",
        }
    }

    pub fn facebook(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "ⓕ",
            IconMode::Ascii => "[fb]",
        }
    }

    pub fn twitter(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "✕",
            IconMode::Ascii => "[x]",
        }
    }

    // === Misc ===

    pub fn help(&self) -> &'static str {
        "?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        let icons = IconSet::default();
        assert_eq!(icons.mode(), IconMode::Unicode);
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for glyph in [
            icons.menu(),
            icons.search(),
            icons.login(),
            icons.instagram(),
            icons.facebook(),
            icons.twitter(),
        ] {
            assert!(glyph.is_ascii(), "{glyph} is not ASCII");
        }
    }

    #[test]
    fn test_social_icons_are_distinct() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_ne!(icons.instagram(), icons.facebook());
        assert_ne!(icons.facebook(), icons.twitter());
    }
}
