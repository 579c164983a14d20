use crate::util::text::{next_grapheme_boundary, prev_grapheme_boundary};

/// Cursor-aware single-line input state, shared by the search box, the
/// add-task title, and the inline edit title. The cursor is a byte offset,
/// always on a grapheme boundary.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        TextInput::default()
    }

    /// Seed the input with existing text, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        TextInput {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text before and after the cursor, for rendering a split cursor block.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the grapheme before the cursor. Returns false at the start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = prev_grapheme_boundary(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    /// Remove the grapheme under the cursor. Returns false at the end.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let end = next_grapheme_boundary(&self.text, self.cursor);
        self.text.replace_range(self.cursor..end, "");
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_grapheme_boundary(&self.text, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_grapheme_boundary(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_move_track_the_cursor() {
        let mut input = TextInput::new();
        for c in "milk".chars() {
            input.insert(c);
        }
        assert_eq!(input.text(), "milk");
        input.move_left();
        input.move_left();
        input.insert('_');
        assert_eq!(input.text(), "mi_lk");
        input.move_home();
        input.insert('>');
        assert_eq!(input.text(), ">mi_lk");
        input.move_end();
        input.insert('<');
        assert_eq!(input.text(), ">mi_lk<");
    }

    #[test]
    fn backspace_and_delete_remove_whole_graphemes() {
        let mut input = TextInput::with_text("ae\u{0301}i"); // a, é (combining), i
        input.move_left(); // before i
        assert!(input.backspace()); // removes é cluster
        assert_eq!(input.text(), "ai");
        input.move_home();
        assert!(input.delete_forward());
        assert_eq!(input.text(), "i");
        assert!(!input.backspace());
        input.move_end();
        assert!(!input.delete_forward());
    }

    #[test]
    fn split_at_cursor_matches_edit_position() {
        let mut input = TextInput::with_text("abc");
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("ab", "c"));
        input.clear();
        assert_eq!(input.split_at_cursor(), ("", ""));
    }
}
