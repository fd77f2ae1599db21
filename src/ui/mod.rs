//! UI abstraction layer
//!
//! The session core talks to the outside world through a handful of traits:
//!
//! - **`Renderer`** - draws a [`Frame`] of session state
//! - **`InputSource`** - yields classified key presses
//! - **`Clipboard`** - receives the selected command text
//! - **`OutputWriter`** - user-facing messages outside the palette
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Session (search + selection)       │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  Renderer, InputSource, Clipboard       │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Terminal      │  │ System            │
//! │ - ratatui     │  │ - arboard         │
//! │ - crossterm   │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```

mod clipboard;
mod error;
mod traits;

pub mod output;
pub mod ratatui_adapter;

pub use clipboard::{Clipboard, SystemClipboard};
pub use error::{Result, UiError};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use traits::{Frame, InputSource, Renderer};
