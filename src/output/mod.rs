//! Output formatting for CLI display
//!
//! Plain-text renderings of command records for the non-interactive commands.

use crate::models::CommandRecord;
use colored::Colorize;

/// Format a record as one list line
///
/// Quiet mode prints the bare command so the output can be piped.
#[must_use]
pub fn command_with_details(record: &CommandRecord, quiet: bool) -> String {
    if quiet {
        return record.command.clone();
    }

    let mut line = format!("  {}", record.command.bold());
    if record.favorite {
        line = format!("{} {}", line, "*".yellow());
    }
    if !record.usage.is_empty() {
        line = format!("{} - {}", line, record.usage);
    }
    if !record.tags.is_empty() {
        line = format!("{} {}", line, format_tags(&record.tags).dimmed());
    }
    line
}

/// Format tags as `[a, b]`, or an empty string for no tags
#[must_use]
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!("[{}]", tags.join(", "))
    }
}

/// Summary line for a listing
#[must_use]
pub fn match_summary(shown: usize, total: usize) -> String {
    format!("{shown}/{total} commands")
}
