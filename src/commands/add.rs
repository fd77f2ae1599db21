//! Add command - store a new command

use crate::{
    ImpError,
    models::CommandRecord,
    store::{JsonStore, Store},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, ImpError>;

/// Execute the add command
///
/// # Errors
///
/// Returns `ImpError::InvalidInput` if the command is blank or already
/// stored, or a store error if the file cannot be read or written.
pub fn execute(store: &JsonStore, record: CommandRecord, output: &dyn OutputWriter) -> Result<()> {
    let command = record.command.trim().to_string();
    if command.is_empty() {
        return Err(ImpError::InvalidInput("Command cannot be empty".into()));
    }

    let existing = store.load()?;
    if existing.iter().any(|r| r.command == command) {
        return Err(ImpError::InvalidInput(format!(
            "Command already stored: {command}"
        )));
    }

    let record = CommandRecord { command, ..record };
    let message = format!("Added: {}", record.command);
    store.add(record)?;
    tracing::debug!(path = %store.path().display(), "stored new command");
    output.success(&message);
    Ok(())
}
