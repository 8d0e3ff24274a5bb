//! Text input widget
//!
//! A text input field with cursor support, used as the state holder for
//! form dialog fields.

/// A simple text input
///
/// The cursor is a character index, not a byte index, so editing stays
/// safe on multi-byte input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (character index)
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.chars().count();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Byte offset for a character index
    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor, 2);

        input.backspace();
        assert_eq!(input.value(), "a");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("café");
        assert_eq!(input.cursor, 4);

        input.backspace();
        assert_eq!(input.value(), "caf");

        input.move_start();
        input.insert('é');
        assert_eq!(input.value(), "écaf");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_cursor_movement_and_mid_edit() {
        let mut input = TextInput::new().content("serial");
        input.move_start();
        input.insert('X');
        assert_eq!(input.value(), "Xserial");

        input.move_end();
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "Xseria");
    }
}
