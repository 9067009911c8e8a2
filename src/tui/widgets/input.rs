//! Text input widget
//!
//! A single-line text field with a cursor. Password fields render masked.
//! Content is wiped from memory when the input is cleared or dropped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};
use zeroize::{Zeroize, Zeroizing};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: Zeroizing<String>,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Render every character as a bullet
    pub masked: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        self.content.as_str()
    }

    /// Wipe the content and reset the cursor
    pub fn clear(&mut self) {
        self.content.zeroize();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.len())
        } else {
            self.content.to_string()
        }
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        let input_start = area.x + label_width as u16;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let empty = self.content.is_empty();
        let (text, style) = if empty && !self.focused {
            (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (self.display_text(), Style::default().fg(Color::White))
        } else {
            (self.display_text(), Style::default().fg(Color::Yellow))
        };

        buf.set_string(input_start, area.y, &text, style);

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = text.chars().nth(self.cursor).unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in s.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("abc");
        input.backspace();
        assert_eq!(input.value(), "ab");
        input.move_start();
        input.insert('x');
        assert_eq!(input.value(), "xab");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("café");
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "caf");
        input.insert('é');
        input.insert('s');
        assert_eq!(input.value(), "cafés");
    }

    #[test]
    fn test_clear_wipes_content() {
        let mut input = typed("hunter2!").masked();
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
        input.insert('x');
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_masked_display() {
        let input = typed("secret").masked();
        assert_eq!(input.display_text(), "••••••");
        assert_eq!(input.value(), "secret");
    }
}
