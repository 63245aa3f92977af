//! Error types for the Marknotes core library.

use thiserror::Error;

/// All errors that can occur within the Marknotes core library.
///
/// Store operations on unknown ids do not use this type: they are silently
/// ignored. Errors are reserved for input a caller can correct.
#[derive(Debug, Error)]
pub enum MarknotesError {
    /// A text selection does not lie within the document.
    #[error("Invalid selection {start}..{end} for document of length {len}")]
    InvalidSelection { start: usize, end: usize, len: usize },

    /// A formatting command name did not match any known format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// The platform clipboard rejected a write.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings data could not be (de)serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`MarknotesError`].
pub type Result<T> = std::result::Result<T, MarknotesError>;

impl MarknotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidSelection { .. } => "Selection is outside the document".to_string(),
            Self::UnknownFormat(name) => format!("Unknown formatting command: {name}"),
            Self::Clipboard(_) => "Failed to copy to clipboard".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
