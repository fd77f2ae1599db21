//! Clipboard access

use super::error::Result;

/// Destination for the selected command text
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the clipboard is unavailable or rejects the write.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard through `arboard`
///
/// The handle is opened on the first write.
///
/// On X11 and Wayland the selection is served by this process, so the copied
/// text only outlives `imp` when a clipboard manager takes it over. macOS and
/// Windows keep it regardless.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Create an unopened clipboard handle
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }
}
