//! Search command - the interactive command palette

use crate::{
    ImpError,
    session::{Delivery, Outcome, Session, SessionOptions},
    store::Store,
    ui::{
        Clipboard, OutputWriter, SystemClipboard,
        ratatui_adapter::{CrosstermInput, TerminalRenderer, Theme},
    },
};

type Result<T> = std::result::Result<T, ImpError>;

/// Execute the search command
///
/// Runs the palette on the terminal, then copies the picked command and
/// records its use once the terminal has been handed back.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored.
pub fn execute(
    store: &dyn Store,
    query: &str,
    options: SessionOptions,
    output: &dyn OutputWriter,
) -> Result<()> {
    let corpus = super::load_corpus(store, output);

    let outcome = {
        let mut renderer = TerminalRenderer::new(Theme::default())?;
        let height = renderer.height()?;
        let outcome = Session::new(&corpus, query, options, height)
            .run(&mut CrosstermInput::new(), &mut renderer);
        renderer.restore()?;
        outcome
    };

    finish(outcome, &mut SystemClipboard::new(), store, output);
    Ok(())
}

/// Run the selection side effects and report them
pub fn finish(
    outcome: Outcome<'_>,
    clipboard: &mut dyn Clipboard,
    store: &dyn Store,
    output: &dyn OutputWriter,
) -> Delivery {
    let delivery = outcome.deliver(clipboard, store);

    match outcome.record() {
        Some(record) if delivery.copied => {
            output.success(&format!("Copied: {}", record.command));
        }
        Some(record) => {
            tracing::info!(command = %record.command, "selection was not copied");
        }
        None => tracing::debug!("search cancelled"),
    }

    delivery
}
