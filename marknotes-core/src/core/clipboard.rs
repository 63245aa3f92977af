//! Copying note content to a clipboard.

use crate::Result;

/// A destination for copied text, implemented by the host for the system clipboard.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MarknotesError::Clipboard`] if the platform rejects the write.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// An in-process clipboard, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copies `text` to `clipboard`, reporting success as a boolean.
///
/// Failures are logged and never propagated.
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to copy to clipboard: {e}");
            false
        }
    }
}
