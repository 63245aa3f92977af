//! The note record and helpers for presenting it in the note list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// A user-authored markdown document.
///
/// `id` is assigned once at creation and never changes. `last_edited` is a
/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub last_edited: i64,
}

impl Note {
    /// Creates a note with a freshly generated id, stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: generate_unique_id(),
            title: title.into(),
            content: content.into(),
            last_edited: now_millis(),
        }
    }

    /// The title to show in lists, falling back to `"Untitled"` when blank.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// The content snippet to show in lists, or `"No content"` when empty.
    #[must_use]
    pub fn preview(&self) -> &str {
        if self.content.is_empty() {
            "No content"
        } else {
            &self.content
        }
    }
}

/// Layout of the editing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Editor and preview side by side.
    #[default]
    Split,
    Editor,
    Preview,
}

/// Returns the current wall-clock time as Unix milliseconds.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generates an opaque note id of the form `note_<unix-millis>_<9 chars>`.
///
/// The suffix is taken from a v4 UUID, so two ids generated within the same
/// millisecond still differ.
pub fn generate_unique_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("note_{}_{}", now_millis(), &suffix[..9])
}

/// Formats `timestamp` relative to `now` (both Unix milliseconds) for the note list.
///
/// Anything older than a week is shown as a local calendar date.
pub fn format_relative_time(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;
    let minutes = diff / MS_PER_MINUTE;
    let hours = diff / MS_PER_HOUR;
    let days = diff / MS_PER_DAY;

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    if days < 7 {
        return format!("{days}d ago");
    }
    match chrono::DateTime::from_timestamp_millis(timestamp) {
        Some(utc) => utc
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d")
            .to_string(),
        None => String::new(),
    }
}
