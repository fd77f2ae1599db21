//! Imperium CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the palette (default command)
//! imp
//! imp search docker
//!
//! # Print matches without the palette
//! imp list git
//!
//! # Store a command
//! imp add "git log --oneline" -u "Compact history" -t git
//!
//! # Use another store file, with debug logging
//! imp --store ./commands.json -vv
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/imperium/config.toml` on Linux) and created on first run.

use imperium::{
    ImpError,
    cli::{Cli, Commands},
    commands,
    config::ImpConfig,
    models::CommandRecord,
    store::JsonStore,
    ui::{OutputWriter, StdoutWriter},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Result<T> = std::result::Result<T, ImpError>;

/// Set up diagnostics on stderr
///
/// `-v` flags raise the level; `IMP_LOG` or `RUST_LOG` override it entirely.
fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,imperium=debug",
        2 => "debug,imperium=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_env("IMP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = ImpConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::quiet(quiet);

    let store_path = config.resolve_store_path(cli.store.as_deref());
    tracing::debug!(path = %store_path.display(), "using command store");
    let store = JsonStore::new(store_path);

    let command = cli.get_command();
    let query = command.query();
    match command {
        Commands::Search { .. } => {
            commands::search(&store, &query, config.session_options(), &output)?;
        }
        Commands::List { .. } => {
            commands::list(&store, &query, &output, quiet);
        }
        Commands::Add {
            command,
            usage,
            tags,
            platform,
            notes,
            favorite,
        } => {
            let record = CommandRecord::new(command, usage, tags, &platform)
                .with_notes(notes)
                .with_favorite(favorite);
            commands::add(&store, record, &output)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        StdoutWriter::new().error(&e.to_string());
        std::process::exit(1);
    }
}
