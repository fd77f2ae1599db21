//! Query line editing
//!
//! The caret is a byte offset that always sits on a char boundary.

/// Maximum number of characters accepted in the query
pub const QUERY_CHAR_LIMIT: usize = 256;

/// Editable query text with a caret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    caret: usize,
}

impl QueryInput {
    /// Create a query pre-filled with `text`, caret at the end
    ///
    /// Text beyond [`QUERY_CHAR_LIMIT`] characters is dropped.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text: String = text.chars().take(QUERY_CHAR_LIMIT).collect();
        let caret = text.len();
        Self { text, caret }
    }

    /// Current query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Caret byte offset
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Whether the query is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at the caret; returns whether the text changed
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() || self.text.chars().count() >= QUERY_CHAR_LIMIT {
            return false;
        }
        self.text.insert(self.caret, c);
        self.caret += c.len_utf8();
        true
    }

    /// Remove the character before the caret; returns whether the text changed
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.text.remove(prev);
        self.caret = prev;
        true
    }

    /// Remove the character under the caret; returns whether the text changed
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.text.len() {
            return false;
        }
        self.text.remove(self.caret);
        true
    }

    /// Remove the word before the caret; returns whether the text changed
    pub fn delete_word(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let trimmed = self.text[..self.caret].trim_end();
        let start = trimmed
            .char_indices()
            .rfind(|(_, c)| c.is_whitespace())
            .map_or(0, |(at, c)| at + c.len_utf8());
        self.text.drain(start..self.caret);
        self.caret = start;
        true
    }

    /// Move the caret one character left
    pub fn left(&mut self) {
        self.caret = self.prev_boundary();
    }

    /// Move the caret one character right
    pub fn right(&mut self) {
        if let Some(c) = self.text[self.caret..].chars().next() {
            self.caret += c.len_utf8();
        }
    }

    /// Empty the query; returns whether the text changed
    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.caret = 0;
        changed
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.caret]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_editing() {
        let mut query = QueryInput::default();
        for c in "hello".chars() {
            assert!(query.push(c));
        }
        assert_eq!(query.as_str(), "hello");
        assert_eq!(query.caret(), 5);

        assert!(query.backspace());
        assert_eq!(query.as_str(), "hell");

        query.left();
        query.left();
        assert_eq!(query.caret(), 2);
        query.push('y');
        assert_eq!(query.as_str(), "heyll");

        assert!(query.delete());
        assert_eq!(query.as_str(), "heyl");

        assert!(query.clear());
        assert!(query.is_empty());
        assert!(!query.clear());
    }

    #[test]
    fn test_multibyte_caret_moves_on_boundaries() {
        let mut query = QueryInput::new("héé");
        query.left();
        assert_eq!(query.caret(), 3);
        query.right();
        assert_eq!(query.caret(), 5);
        query.right();
        assert_eq!(query.caret(), 5);
        assert!(query.backspace());
        assert_eq!(query.as_str(), "hé");
    }

    #[test]
    fn test_noop_edits_report_unchanged() {
        let mut query = QueryInput::default();
        assert!(!query.backspace());
        assert!(!query.delete());
        assert!(!query.delete_word());
        query.left();
        assert_eq!(query.caret(), 0);
    }

    #[test]
    fn test_delete_word() {
        let mut query = QueryInput::new("docker compose up");
        assert!(query.delete_word());
        assert_eq!(query.as_str(), "docker compose ");
        assert!(query.delete_word());
        assert_eq!(query.as_str(), "docker ");
        assert!(query.delete_word());
        assert_eq!(query.as_str(), "");
    }

    #[test]
    fn test_delete_word_stops_at_any_whitespace() {
        let mut query = QueryInput::new("git\tlog");
        assert!(query.delete_word());
        assert_eq!(query.as_str(), "git\t");

        let mut query = QueryInput::new("ls\u{3000}-la");
        assert!(query.delete_word());
        assert_eq!(query.as_str(), "ls\u{3000}");
        assert_eq!(query.caret(), query.as_str().len());
    }

    #[test]
    fn test_char_limit() {
        let long: String = "a".repeat(QUERY_CHAR_LIMIT + 10);
        let mut query = QueryInput::new(&long);
        assert_eq!(query.as_str().chars().count(), QUERY_CHAR_LIMIT);
        assert!(!query.push('b'));
    }

    #[test]
    fn test_control_chars_rejected() {
        let mut query = QueryInput::default();
        assert!(!query.push('\n'));
        assert!(query.is_empty());
    }
}
