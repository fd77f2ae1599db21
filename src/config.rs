//! Configuration module for imperium
//!
//! Manages the store location and palette sizing. Configuration is stored in
//! the user's config directory (`~/.config/imperium/config.toml` on Linux).

use crate::session::SessionOptions;
use crate::store::JsonStore;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ImpConfig {
    /// Command store file; `~/.config/imperium/commands.json` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Rows moved by page up/down
    pub page_size: usize,

    /// Fewest result rows shown
    pub min_visible_rows: usize,

    /// Most result rows shown
    pub max_visible_rows: usize,

    /// Terminal rows kept for the title, search box, header and help
    pub reserved_rows: usize,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for ImpConfig {
    fn default() -> Self {
        let options = SessionOptions::default();
        Self {
            store_path: None,
            page_size: options.page_size,
            min_visible_rows: options.min_rows,
            max_visible_rows: options.max_rows,
            reserved_rows: options.reserved_rows,
            quiet: false,
        }
    }
}

impl ImpConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("imperium").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// Keys missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            tracing::debug!(path = %path.display(), "wrote default configuration");
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Store file to use, honoring an explicit override
    #[must_use]
    pub fn resolve_store_path(&self, overridden: Option<&Path>) -> PathBuf {
        overridden
            .map(Path::to_path_buf)
            .or_else(|| self.store_path.clone())
            .unwrap_or_else(JsonStore::default_path)
    }

    /// Navigation and sizing options for a search session
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            page_size: self.page_size,
            min_rows: self.min_visible_rows,
            max_rows: self.max_visible_rows,
            reserved_rows: self.reserved_rows,
        }
    }

}
