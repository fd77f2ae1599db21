//! List command - print matching commands without the palette

use crate::{output, search, store::Store, ui::OutputWriter};

/// Execute the list command
///
/// Prints the corpus in match order for `query`, or in relevance order
/// when the query is empty.
pub fn execute(store: &dyn Store, query: &str, output: &dyn OutputWriter, quiet: bool) {
    let corpus = super::load_corpus(store, output);
    let results = search::search(query, &corpus);

    if results.is_empty() {
        output.info("No matching commands");
        return;
    }

    for record in results.records(&corpus) {
        output.write(&output::command_with_details(record, quiet));
    }
    output.info(&output::match_summary(results.len(), corpus.len()));
}
