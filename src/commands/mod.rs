//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the command store.

pub mod add;
pub mod list;
pub mod search;

pub use add::execute as add;
pub use list::execute as list;
pub use search::execute as search;

use crate::models::CommandRecord;
use crate::store::Store;
use crate::ui::OutputWriter;

/// Load the corpus, falling back to an empty one if the store is unreadable
pub fn load_corpus(store: &dyn Store, output: &dyn OutputWriter) -> Vec<CommandRecord> {
    match store.load() {
        Ok(commands) => {
            tracing::debug!(count = commands.len(), "loaded commands");
            commands
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load commands");
            output.warning(&format!("Could not load commands: {e}"));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStore, palette_corpus};
    use crate::ui::{BufferedWriter, MessageLevel};

    #[test]
    fn test_load_corpus() {
        let store = MemoryStore::new(palette_corpus());
        let output = BufferedWriter::new();
        assert_eq!(load_corpus(&store, &output).len(), 2);
        assert!(output.messages().is_empty());
    }

    #[test]
    fn test_load_failure_gives_empty_corpus() {
        let store = MemoryStore::failing();
        let output = BufferedWriter::new();
        assert!(load_corpus(&store, &output).is_empty());
        assert_eq!(output.messages_at(MessageLevel::Warning).len(), 1);
    }
}
