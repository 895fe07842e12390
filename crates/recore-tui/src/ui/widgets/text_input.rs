//! Single-line text input widget, used by the search bar and login form.

use crate::theme::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use recore_core::Theme;

/// A single-line text input widget.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    /// The text content.
    content: String,
    /// Cursor position (character index).
    cursor: usize,
    /// Optional block for borders/title.
    block: Option<Block<'a>>,
    /// Whether the input is focused.
    focused: bool,
    /// Placeholder text.
    placeholder: Option<&'a str>,
    /// Render content as mask characters (password fields).
    masked: bool,
    /// Prompt prefix.
    prompt: &'a str,
    /// Active theme.
    theme: Theme,
}

impl<'a> TextInput<'a> {
    /// Create a widget from input state for the given theme.
    pub fn from_state(state: &TextInputState, theme: Theme) -> Self {
        Self {
            content: state.content.clone(),
            cursor: state.cursor,
            block: None,
            focused: false,
            placeholder: None,
            masked: false,
            prompt: "> ",
            theme,
        }
    }

    /// Set the block for the text input.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set focus state.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Render content as `*` characters.
    #[must_use]
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.theme);

        let inner = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        // Show placeholder if empty
        if self.content.is_empty() {
            let mut spans = vec![Span::styled(self.prompt, palette.highlight())];
            if self.focused {
                spans.push(Span::styled("_", palette.highlight()));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(placeholder, palette.dim()));
            }
            Paragraph::new(Line::from(spans)).render(inner, buf);
            return;
        }

        let shown: String = if self.masked {
            "*".repeat(self.content.chars().count())
        } else {
            self.content.clone()
        };

        // Insert the cursor marker at the character position.
        let mut line = String::from(self.prompt);
        let mut cursor_drawn = false;
        for (i, ch) in shown.chars().enumerate() {
            if self.focused && i == self.cursor {
                line.push('|');
                cursor_drawn = true;
            }
            line.push(ch);
        }
        if self.focused && !cursor_drawn {
            line.push('_');
        }

        Paragraph::new(Line::from(line))
            .style(palette.default_style())
            .render(inner, buf);
    }
}

/// State for a text input, managing content and cursor position.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content.
    pub content: String,
    /// Cursor position (character index).
    pub cursor: usize,
}

impl TextInputState {
    /// Create a new empty text input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, clearing the state.
    pub fn take(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        content
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index();
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index();
        self.content.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Byte offset of the cursor's character position.
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }
}
