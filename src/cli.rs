//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **search**: interactive command palette (default)
//! - **list**: print matching commands without the palette
//! - **add**: store a new command
//!
//! # Examples
//!
//! ```
//! use imperium::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["imp", "search", "docker", "ps"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "imp")]
#[command(about = "Command your commands", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command store file (overrides config)
    #[arg(long = "store", value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the command palette, optionally pre-filled (default)
    #[command(visible_alias = "s")]
    Search {
        /// Initial query; multiple words are joined with spaces
        #[arg(value_name = "QUERY")]
        query: Vec<String>,
    },

    /// Print matching commands, most relevant first
    #[command(visible_alias = "ls")]
    List {
        /// Query to filter by; all commands when omitted
        #[arg(value_name = "QUERY")]
        query: Vec<String>,
    },

    /// Store a new command
    Add {
        /// The command text
        #[arg(value_name = "COMMAND")]
        command: String,

        /// What the command does
        #[arg(short = 'u', long = "usage", default_value = "")]
        usage: String,

        /// Tags (can specify multiple: -t git -t vcs)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Target platform
        #[arg(short = 'p', long = "platform", default_value = crate::models::DEFAULT_PLATFORM)]
        platform: String,

        /// Free-form notes
        #[arg(short = 'n', long = "notes", default_value = "")]
        notes: String,

        /// Pin to the top of the unfiltered list
        #[arg(short = 'f', long = "favorite")]
        favorite: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Search with an empty query
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Search { query: Vec::new() })
    }
}

impl Commands {
    /// Query words joined into a single query string
    #[must_use]
    pub fn query(&self) -> String {
        match self {
            Self::Search { query } | Self::List { query } => query.join(" "),
            Self::Add { .. } => String::new(),
        }
    }
}
