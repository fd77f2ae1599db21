//! Ratatui widgets for the palette
//!
//! Custom widgets for rendering the search interface.

mod help_bar;
mod result_table;
mod search_bar;

pub use help_bar::{DEFAULT_HINTS, HelpBar, KeyHint};
pub use result_table::{ColumnWidths, EMPTY_MESSAGE, ResultTable, truncate};
pub use search_bar::{PLACEHOLDER, SearchBar};
