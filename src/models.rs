//! Stored command records
//!
//! A [`CommandRecord`] is a single shell snippet with its usage text, tags and
//! bookkeeping timestamps. Records are serialized to JSON by the store and are
//! read-only for the duration of a search session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default platform for records created without one
pub const DEFAULT_PLATFORM: &str = "macos";

/// A stored command with metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command text itself, also the record's unique key
    pub command: String,
    /// Short description of what the command does
    pub usage: String,
    /// Ordered tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Target platform (macos | linux | windows)
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Example invocations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    /// Pinned to the top of the unfiltered list
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub favorite: bool,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last copied from a search session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

impl CommandRecord {
    /// Create a new record stamped with the current time
    ///
    /// An empty `platform` falls back to [`DEFAULT_PLATFORM`].
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        usage: impl Into<String>,
        tags: Vec<String>,
        platform: &str,
    ) -> Self {
        let platform = if platform.is_empty() {
            DEFAULT_PLATFORM
        } else {
            platform
        };

        Self {
            command: command.into(),
            usage: usage.into(),
            tags,
            platform: platform.to_string(),
            examples: Vec::new(),
            notes: String::new(),
            favorite: false,
            created_at: Utc::now(),
            last_used: None,
        }
    }

    /// Set the favorite flag
    #[must_use]
    pub const fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Set the notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Set the creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the last-used timestamp
    #[must_use]
    pub const fn with_last_used(mut self, last_used: Option<DateTime<Utc>>) -> Self {
        self.last_used = last_used;
        self
    }

    /// Stamp the record as used now
    pub fn mark_used(&mut self) {
        self.last_used = Some(Utc::now());
    }

    /// Text the fuzzy matcher runs against
    ///
    /// Tags come first so that tag hits land early in the haystack, followed by
    /// usage, the command and (when present) the notes, separated by spaces.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut parts = vec![self.tags.join(" "), self.usage.clone(), self.command.clone()];
        if !self.notes.is_empty() {
            parts.push(self.notes.clone());
        }
        parts.join(" ")
    }
}

/// Root structure of the JSON store file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandStorage {
    #[serde(default)]
    pub commands: Vec<CommandRecord>,
}
