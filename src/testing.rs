//! Testing utilities for imperium
//!
//! Record builders with fixed timestamps, and in-memory stand-ins for the
//! session collaborators (input, renderer, clipboard, store).
//!
//! Only available when compiled with `cfg(test)`.

use crate::models::CommandRecord;
use crate::session::Action;
use crate::store::{Store, StoreError};
use crate::ui::{self, Clipboard, Frame, InputSource, Renderer, UiError};
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

/// A fixed instant `secs` seconds after the Unix epoch
///
/// # Panics
/// Panics if `secs` is outside chrono's representable range.
#[must_use]
pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("timestamp in range")
}

/// Record with the given command and tags, empty usage, created at the epoch
#[must_use]
pub fn record(command: &str, tags: &[&str]) -> CommandRecord {
    CommandRecord::new(
        command,
        "",
        tags.iter().map(ToString::to_string).collect(),
        "",
    )
    .with_created_at(at(0))
}

/// `[git status (git), docker ps (docker, favorite)]`
#[must_use]
pub fn palette_corpus() -> Vec<CommandRecord> {
    vec![
        record("git status", &["git"]),
        record("docker ps", &["docker"]).with_favorite(true),
    ]
}

/// Input source replaying a fixed list of actions, then exhausted
pub struct ScriptedInput {
    actions: VecDeque<Action>,
}

impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_action(&mut self) -> io::Result<Option<Action>> {
        Ok(self.actions.pop_front())
    }
}

/// Input source whose reads always fail
pub struct FailingInput;

impl InputSource for FailingInput {
    fn next_action(&mut self) -> io::Result<Option<Action>> {
        Err(io::Error::other("input closed"))
    }
}

/// What a renderer was asked to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub query: String,
    pub cursor: usize,
    pub viewport_start: usize,
    pub results: Vec<usize>,
}

/// Renderer that records every frame, optionally failing each draw
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<FrameSnapshot>,
    fail: bool,
}

impl RecordingRenderer {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            frames: Vec::new(),
            fail: true,
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> ui::Result<()> {
        self.frames.push(FrameSnapshot {
            query: frame.query.as_str().to_string(),
            cursor: frame.selection.cursor(),
            viewport_start: frame.selection.viewport_start(),
            results: frame.selection.results().indices().to_vec(),
        });
        if self.fail {
            return Err(UiError::IoError(io::Error::other("draw failed")));
        }
        Ok(())
    }
}

/// Clipboard keeping the last written text
#[derive(Default)]
pub struct FakeClipboard {
    pub contents: Option<String>,
    fail: bool,
}

impl FakeClipboard {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }
}

impl Clipboard for FakeClipboard {
    fn write_text(&mut self, text: &str) -> ui::Result<()> {
        if self.fail {
            return Err(UiError::IoError(io::Error::other("no clipboard")));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Store holding records in memory and remembering `mark_used` calls
pub struct MemoryStore {
    commands: RefCell<Vec<CommandRecord>>,
    marked: RefCell<Vec<String>>,
    fail: bool,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(commands: Vec<CommandRecord>) -> Self {
        Self {
            commands: RefCell::new(commands),
            marked: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    /// Store whose every operation fails
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            marked: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    /// Commands passed to `mark_used`, in call order
    #[must_use]
    pub fn marked(&self) -> Vec<String> {
        self.marked.borrow().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::IoError(io::Error::other("store offline")));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Vec<CommandRecord>, StoreError> {
        self.check()?;
        Ok(self.commands.borrow().clone())
    }

    fn mark_used(&self, command: &str) -> Result<(), StoreError> {
        self.check()?;
        self.marked.borrow_mut().push(command.to_string());
        if let Some(record) = self
            .commands
            .borrow_mut()
            .iter_mut()
            .find(|r| r.command == command)
        {
            record.mark_used();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let rec = record("git status", &["git", "vcs"]);
        assert_eq!(rec.command, "git status");
        assert!(rec.usage.is_empty());
        assert_eq!(rec.tags, vec!["git".to_string(), "vcs".to_string()]);
        assert_eq!(rec.created_at, at(0));
    }

    #[test]
    fn test_memory_store_marks_used() {
        let store = MemoryStore::new(palette_corpus());
        store.mark_used("git status").unwrap();

        let commands = store.load().unwrap();
        assert!(commands[0].last_used.is_some());
        assert!(commands[1].last_used.is_none());
        assert_eq!(store.marked(), vec!["git status".to_string()]);
    }
}
