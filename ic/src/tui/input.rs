//! Single-line text input with a UTF-8 aware cursor

use tracing::debug;

/// Editable line of text; `cursor` is a byte offset on a char boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefilled input with the cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Display width of the text before the cursor, in chars
    pub fn cursor_column(&self) -> usize {
        self.split_at_cursor().0.chars().count()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Split the value at the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor.min(self.value.len()))
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char before the cursor; returns whether anything changed
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let new_pos = self.prev_char_boundary(self.cursor);
        self.value.drain(new_pos..self.cursor);
        self.cursor = new_pos;
        true
    }

    /// Delete the char under the cursor; returns whether anything changed
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        let end_pos = self.next_char_boundary(self.cursor);
        self.value.drain(self.cursor..end_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_char_boundary(self.cursor);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_char_boundary(self.cursor);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Find the previous character boundary in the input
    fn prev_char_boundary(&self, pos: usize) -> usize {
        debug!(%pos, "TextInput::prev_char_boundary: called");
        let mut new_pos = pos.saturating_sub(1);
        while new_pos > 0 && !self.value.is_char_boundary(new_pos) {
            new_pos -= 1;
        }
        new_pos
    }

    /// Find the next character boundary in the input
    fn next_char_boundary(&self, pos: usize) -> usize {
        debug!(%pos, "TextInput::next_char_boundary: called");
        let mut new_pos = pos + 1;
        while new_pos < self.value.len() && !self.value.is_char_boundary(new_pos) {
            new_pos += 1;
        }
        new_pos.min(self.value.len())
    }
}
