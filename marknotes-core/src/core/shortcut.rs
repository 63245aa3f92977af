//! Keyboard accelerators for formatting commands.

use crate::MarkdownFormat;

/// Platform family, which decides the primary accelerator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Command (⌘) is the accelerator.
    Mac,
    /// Control is the accelerator.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

/// A key press as reported by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// The key's text, e.g. `"b"` or `"K"`.
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyPress {
    /// A press of `key` with Control held.
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self { key: key.into(), meta: false, ctrl: true }
    }

    /// A press of `key` with Command held.
    pub fn meta(key: impl Into<String>) -> Self {
        Self { key: key.into(), meta: true, ctrl: false }
    }

    /// Whether the accelerator for `platform` is held.
    #[must_use]
    pub fn has_accelerator(&self, platform: Platform) -> bool {
        match platform {
            Platform::Mac => self.meta,
            Platform::Other => self.ctrl,
        }
    }
}

/// Returns the format bound to `press`, or `None` if the press is not a shortcut.
pub fn format_for_key(press: &KeyPress, platform: Platform) -> Option<MarkdownFormat> {
    if !press.has_accelerator(platform) {
        return None;
    }
    match press.key.to_lowercase().as_str() {
        "b" => Some(MarkdownFormat::Bold),
        "i" => Some(MarkdownFormat::Italic),
        "1" => Some(MarkdownFormat::Heading1),
        "2" => Some(MarkdownFormat::Heading2),
        "3" => Some(MarkdownFormat::Heading3),
        "8" => Some(MarkdownFormat::BulletList),
        "9" => Some(MarkdownFormat::NumberedList),
        "`" => Some(MarkdownFormat::Code),
        "k" => Some(MarkdownFormat::Link),
        _ => None,
    }
}
