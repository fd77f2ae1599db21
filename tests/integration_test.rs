//! Integration tests for the imperium palette
//!
//! These tests drive complete sessions against a JSON store in a temporary
//! directory, with scripted input standing in for the terminal.

use chrono::DateTime;
use imperium::commands::search::finish;
use imperium::models::CommandRecord;
use imperium::session::{Action, Outcome, Session, SessionOptions};
use imperium::store::{JsonStore, Store};
use imperium::ui::{self, BufferedWriter, Clipboard, Frame, InputSource, MessageLevel, Renderer};
use std::collections::VecDeque;
use std::fs;
use tempfile::TempDir;

struct Script(VecDeque<Action>);

impl Script {
    fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self(actions.into_iter().collect())
    }

    fn typing(text: &str) -> impl Iterator<Item = Action> + '_ {
        text.chars().map(Action::Insert)
    }
}

impl InputSource for Script {
    fn next_action(&mut self) -> std::io::Result<Option<Action>> {
        Ok(self.0.pop_front())
    }
}

#[derive(Default)]
struct CountingRenderer {
    frames: usize,
    last_count: usize,
}

impl Renderer for CountingRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> ui::Result<()> {
        self.frames += 1;
        self.last_count = frame.selection.len();
        Ok(())
    }
}

#[derive(Default)]
struct MemoryClipboard(Option<String>);

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> ui::Result<()> {
        self.0 = Some(text.to_string());
        Ok(())
    }
}

/// Helper function to create a store seeded with a few commands
fn setup_store(dir: &TempDir) -> JsonStore {
    let created = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let store = JsonStore::new(dir.path().join("imperium").join("commands.json"));
    store
        .save(&[
            CommandRecord::new("git status", "Show working tree status", vec!["git".into()], "")
                .with_created_at(created),
            CommandRecord::new("docker ps", "List containers", vec!["docker".into()], "linux")
                .with_favorite(true)
                .with_created_at(created),
            CommandRecord::new("kubectl get pods", "List pods", vec!["k8s".into()], "")
                .with_created_at(created),
        ])
        .unwrap();
    store
}

#[test]
fn test_search_select_copy_and_mark_used() {
    let dir = TempDir::new().unwrap();
    let store = setup_store(&dir);
    let corpus = store.load().unwrap();

    let mut input = Script::new(Script::typing("kgp").chain([Action::Confirm]));
    let mut renderer = CountingRenderer::default();
    let outcome = Session::new(&corpus, "", SessionOptions::default(), 24)
        .run(&mut input, &mut renderer);

    assert_eq!(
        outcome.record().map(|r| r.command.as_str()),
        Some("kubectl get pods")
    );
    assert_eq!(renderer.frames, 4);
    assert_eq!(renderer.last_count, 1);

    let mut clipboard = MemoryClipboard::default();
    let output = BufferedWriter::new();
    let delivery = finish(outcome, &mut clipboard, &store, &output);

    assert!(delivery.copied && delivery.marked);
    assert_eq!(clipboard.0.as_deref(), Some("kubectl get pods"));
    assert_eq!(
        output.messages_at(MessageLevel::Success),
        vec!["Copied: kubectl get pods"]
    );

    let reloaded = store.load().unwrap();
    let used: Vec<_> = reloaded
        .iter()
        .filter(|r| r.last_used.is_some())
        .map(|r| r.command.as_str())
        .collect();
    assert_eq!(used, vec!["kubectl get pods"]);
}

#[test]
fn test_used_command_ranks_after_favorite_next_session() {
    let dir = TempDir::new().unwrap();
    let store = setup_store(&dir);
    store.mark_used("git status").unwrap();
    let corpus = store.load().unwrap();

    let session = Session::new(&corpus, "", SessionOptions::default(), 24);
    let order: Vec<_> = session
        .selection()
        .results()
        .records(&corpus)
        .map(|r| r.command.as_str())
        .collect();

    assert_eq!(order, vec!["docker ps", "git status", "kubectl get pods"]);
}

#[test]
fn test_escape_twice_cancels_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let store = setup_store(&dir);
    let corpus = store.load().unwrap();

    let mut input = Script::new([Action::Quit, Action::Quit]);
    let mut renderer = CountingRenderer::default();
    let outcome = Session::new(&corpus, "docker", SessionOptions::default(), 24)
        .run(&mut input, &mut renderer);
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(renderer.frames, 2);

    let mut clipboard = MemoryClipboard::default();
    let output = BufferedWriter::new();
    finish(outcome, &mut clipboard, &store, &output);

    assert!(clipboard.0.is_none());
    assert!(store.load().unwrap().iter().all(|r| r.last_used.is_none()));
}

#[test]
fn test_missing_store_is_empty_palette() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("missing").join("commands.json"));
    let corpus = store.load().unwrap();
    assert!(corpus.is_empty());

    let mut input = Script::new([Action::Confirm, Action::Interrupt]);
    let mut renderer = CountingRenderer::default();
    let outcome = Session::new(&corpus, "", SessionOptions::default(), 24)
        .run(&mut input, &mut renderer);

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(renderer.last_count, 0);
}

#[test]
fn test_store_file_format() {
    let dir = TempDir::new().unwrap();
    let store = setup_store(&dir);

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let commands = value["commands"].as_array().unwrap();

    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0]["command"], "git status");
    assert_eq!(commands[0]["platform"], "macos");
    assert_eq!(commands[1]["favorite"], true);
    assert!(commands[0].get("last_used").is_none());
}

#[test]
fn test_corrupt_store_reports_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commands.json");
    fs::write(&path, "{ not json").unwrap();

    let store = JsonStore::new(&path);
    assert!(store.load().is_err());

    let output = BufferedWriter::new();
    let corpus = imperium::commands::load_corpus(&store, &output);
    assert!(corpus.is_empty());
    assert_eq!(output.messages_at(MessageLevel::Warning).len(), 1);
}
