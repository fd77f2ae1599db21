//! Classified input events
//!
//! Input sources translate raw key presses into [`Action`]s; the session never
//! sees terminal-specific key codes.

/// One classified input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cursor one row up
    Up,
    /// Cursor one row down
    Down,
    /// Cursor one page up
    PageUp,
    /// Cursor one page down
    PageDown,
    /// Cursor to the first result
    Home,
    /// Cursor to the last result
    End,
    /// Insert a character at the query caret
    Insert(char),
    /// Delete the character before the caret
    Backspace,
    /// Delete the character under the caret
    Delete,
    /// Delete the word before the caret
    DeleteWord,
    /// Move the caret left
    Left,
    /// Move the caret right
    Right,
    /// Empty the query
    Clear,
    /// Pick the record under the cursor
    Confirm,
    /// Leave the palette, or clear the query if there is one
    Quit,
    /// Leave the palette unconditionally
    Interrupt,
    /// The terminal now has `height` rows
    Resize { height: u16 },
}

