//! Ratatui/crossterm terminal adapter
//!
//! Implements the session's [`Renderer`](crate::ui::Renderer) and
//! [`InputSource`](crate::ui::InputSource) seams on top of a real terminal.
//!
//! ```text
//!        ┌────────────── Session ──────────────┐
//!        │                                     │
//!        ▼ Frame                        Action ▲
//! ┌──────────────────┐         ┌──────────────────┐
//! │ TerminalRenderer │         │  CrosstermInput  │
//! │    (ratatui)     │         │   (crossterm)    │
//! └──────────────────┘         └──────────────────┘
//! ```

mod events;
mod renderer;
mod theme;
pub mod widgets;

pub use events::{CrosstermInput, classify};
pub use renderer::{TITLE, TerminalRenderer};
pub use theme::Theme;
