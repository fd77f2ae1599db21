//! Command persistence
//!
//! The [`Store`] trait is what a search session needs from persistence:
//! load the corpus once, and stamp a record as used after it was picked.
//! [`JsonStore`] keeps the corpus in a single JSON file:
//!
//! ```json
//! { "commands": [ { "command": "git status", "usage": "...", ... } ] }
//! ```
//!
//! Writes go to `<path>.tmp` first and are renamed over the real file.

pub mod error;

pub use error::StoreError;

use crate::models::{CommandRecord, CommandStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence used by a search session
pub trait Store {
    /// Load every stored record
    ///
    /// A missing or empty store is an empty corpus, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store exists but cannot be read or parsed.
    fn load(&self) -> Result<Vec<CommandRecord>, StoreError>;

    /// Set `last_used` to now on the record whose command is `command`
    ///
    /// Unknown commands are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    fn mark_used(&self, command: &str) -> Result<(), StoreError>;
}

/// JSON-file backed store
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store at `path`; nothing is touched on disk until first use
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location, `~/.config/imperium/commands.json`
    ///
    /// Falls back to the current directory when the home directory is unknown.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("imperium")
            .join("commands.json")
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Replace the stored corpus
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created, serialization
    /// fails, or the temporary file cannot be written or renamed.
    pub fn save(&self, commands: &[CommandRecord]) -> Result<(), StoreError> {
        self.ensure_dir()?;

        let storage = CommandStorage {
            commands: commands.to_vec(),
        };
        let data = serde_json::to_string_pretty(&storage)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Append a record
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if loading or saving fails.
    pub fn add(&self, record: CommandRecord) -> Result<(), StoreError> {
        let mut commands = self.load()?;
        commands.push(record);
        self.save(&commands)
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<Vec<CommandRecord>, StoreError> {
        self.ensure_dir()?;

        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let storage: CommandStorage = serde_json::from_str(&data)?;
        Ok(storage.commands)
    }

    fn mark_used(&self, command: &str) -> Result<(), StoreError> {
        let mut commands = self.load()?;

        if let Some(record) = commands.iter_mut().find(|r| r.command == command) {
            record.mark_used();
        } else {
            tracing::debug!(command, "mark_used: no matching record");
        }

        self.save(&commands)
    }
}
