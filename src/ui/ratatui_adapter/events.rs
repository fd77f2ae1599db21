//! Event handling for the terminal palette
//!
//! Maps crossterm key and resize events to session [`Action`]s.

use crate::session::Action;
use crate::ui::InputSource;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Classify one crossterm event, `None` for events the palette ignores
#[must_use]
pub fn classify(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => classify_key(*key),
        Event::Resize(_, rows) => Some(Action::Resize { height: *rows }),
        _ => None,
    }
}

fn classify_key(key: KeyEvent) -> Option<Action> {
    let action = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Interrupt,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Enter, _) => Action::Confirm,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::Up,
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::Down,
        (KeyCode::PageUp, _) | (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::PageUp,
        (KeyCode::PageDown, _) | (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::PageDown,
        (KeyCode::Home, _) => Action::Home,
        (KeyCode::End, _) => Action::End,

        // Query editing
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::Clear,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::DeleteWord,
        (KeyCode::Backspace, _) | (KeyCode::Char('h'), KeyModifiers::CONTROL) => Action::Backspace,
        (KeyCode::Delete, _) => Action::Delete,
        (KeyCode::Left, _) => Action::Left,
        (KeyCode::Right, _) => Action::Right,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Insert(c),

        _ => return None,
    };
    Some(action)
}

/// Blocking input source reading from the terminal
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    /// Create a terminal input source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn next_action(&mut self) -> std::io::Result<Option<Action>> {
        loop {
            let event = event::read()?;
            if let Some(action) = classify(&event) {
                return Ok(Some(action));
            }
            tracing::trace!(?event, "ignored terminal event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        classify(&Event::Key(KeyEvent::new(code, modifiers)))
    }

    fn ctrl(c: char) -> Option<Action> {
        key(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key(KeyCode::Up, KeyModifiers::NONE), Some(Action::Up));
        assert_eq!(ctrl('p'), Some(Action::Up));
        assert_eq!(key(KeyCode::Down, KeyModifiers::NONE), Some(Action::Down));
        assert_eq!(ctrl('n'), Some(Action::Down));
        assert_eq!(ctrl('u'), Some(Action::PageUp));
        assert_eq!(ctrl('d'), Some(Action::PageDown));
        assert_eq!(key(KeyCode::PageUp, KeyModifiers::NONE), Some(Action::PageUp));
        assert_eq!(key(KeyCode::PageDown, KeyModifiers::NONE), Some(Action::PageDown));
        assert_eq!(key(KeyCode::Home, KeyModifiers::NONE), Some(Action::Home));
        assert_eq!(key(KeyCode::End, KeyModifiers::NONE), Some(Action::End));
    }

    #[test]
    fn test_exit_keys() {
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Some(Action::Confirm));
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), Some(Action::Quit));
        assert_eq!(ctrl('c'), Some(Action::Interrupt));
    }

    #[test]
    fn test_query_editing_keys() {
        assert_eq!(key(KeyCode::Char('r'), KeyModifiers::NONE), Some(Action::Insert('r')));
        assert_eq!(key(KeyCode::Char('R'), KeyModifiers::SHIFT), Some(Action::Insert('R')));
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), Some(Action::Backspace));
        assert_eq!(ctrl('h'), Some(Action::Backspace));
        assert_eq!(key(KeyCode::Delete, KeyModifiers::NONE), Some(Action::Delete));
        assert_eq!(ctrl('w'), Some(Action::DeleteWord));
        assert_eq!(ctrl('l'), Some(Action::Clear));
        assert_eq!(key(KeyCode::Left, KeyModifiers::NONE), Some(Action::Left));
        assert_eq!(key(KeyCode::Right, KeyModifiers::NONE), Some(Action::Right));
    }

    #[test]
    fn test_q_is_typeable() {
        assert_eq!(key(KeyCode::Char('q'), KeyModifiers::NONE), Some(Action::Insert('q')));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(ctrl('t'), None);
        assert_eq!(key(KeyCode::F(1), KeyModifiers::NONE), None);
        assert_eq!(key(KeyCode::Char('x'), KeyModifiers::ALT), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(classify(&Event::Key(release)), None);
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(
            classify(&Event::Resize(80, 30)),
            Some(Action::Resize { height: 30 })
        );
        assert_eq!(classify(&Event::FocusGained), None);
    }
}
