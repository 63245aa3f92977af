//! Markdown formatting commands applied to a text selection.
//!
//! Each [`MarkdownFormat`] wraps the selected text in markdown punctuation.
//! Selections are expressed as character (Unicode scalar) offsets into the
//! document. An empty selection formats the placeholder [`PLACEHOLDER`], so
//! the user gets a template to type over instead of bare punctuation.
//!
//! ```rust
//! use marknotes_core::{apply_format, MarkdownFormat};
//!
//! let edit = apply_format("hello", 0, 5, MarkdownFormat::Italic).unwrap();
//! assert_eq!(edit.content, "*hello*");
//! assert_eq!(edit.caret, 7);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{MarknotesError, Result};

/// Text substituted for an empty selection before formatting.
pub const PLACEHOLDER: &str = "text";

/// What the Tab key inserts in the editor.
pub const TAB_INDENT: &str = "  ";

/// A formatting command from the toolbar or a keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkdownFormat {
    Bold,
    Italic,
    Heading1,
    Heading2,
    Heading3,
    BulletList,
    NumberedList,
    Code,
    CodeBlock,
    Link,
    Image,
    Quote,
}

impl MarkdownFormat {
    /// Every format, in toolbar order.
    pub const ALL: [MarkdownFormat; 12] = [
        Self::Bold,
        Self::Italic,
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::BulletList,
        Self::NumberedList,
        Self::Code,
        Self::CodeBlock,
        Self::Link,
        Self::Image,
        Self::Quote,
    ];

    /// The command name used by toolbars and scripts (e.g. `"bulletList"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::BulletList => "bulletList",
            Self::NumberedList => "numberedList",
            Self::Code => "code",
            Self::CodeBlock => "codeBlock",
            Self::Link => "link",
            Self::Image => "image",
            Self::Quote => "quote",
        }
    }

    /// Human-readable name for tooltips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::Heading3 => "Heading 3",
            Self::BulletList => "Bullet List",
            Self::NumberedList => "Numbered List",
            Self::Code => "Inline Code",
            Self::CodeBlock => "Code Block",
            Self::Link => "Link",
            Self::Image => "Image",
            Self::Quote => "Quote",
        }
    }

    /// Wraps `text` in this format's markdown syntax.
    #[must_use]
    pub fn transform(self, text: &str) -> String {
        match self {
            Self::Bold => format!("**{text}**"),
            Self::Italic => format!("*{text}*"),
            Self::Heading1 => format!("# {text}"),
            Self::Heading2 => format!("## {text}"),
            Self::Heading3 => format!("### {text}"),
            Self::BulletList => format!("- {text}"),
            Self::NumberedList => format!("1. {text}"),
            Self::Code => format!("`{text}`"),
            Self::CodeBlock => format!("```\n{text}\n```"),
            Self::Link => format!("[{text}](url)"),
            Self::Image => format!("![{text}](url)"),
            Self::Quote => format!("> {text}"),
        }
    }
}

impl fmt::Display for MarkdownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkdownFormat {
    type Err = MarknotesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| MarknotesError::UnknownFormat(s.to_string()))
    }
}

/// The result of an edit: the new document and where the caret lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub content: String,
    /// Character offset of the collapsed caret.
    pub caret: usize,
}

/// Converts a character offset into a byte offset, if it lies within `text`.
fn byte_offset(text: &str, char_index: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(char_index)
}

/// Replaces the characters `start..end` of `doc` with `replacement`.
///
/// The caret collapses to the end of the inserted text.
///
/// # Errors
///
/// Returns [`MarknotesError::InvalidSelection`] unless
/// `start <= end <= doc.chars().count()`.
pub fn replace_selection(doc: &str, start: usize, end: usize, replacement: &str) -> Result<TextEdit> {
    let invalid = || MarknotesError::InvalidSelection {
        start,
        end,
        len: doc.chars().count(),
    };
    if start > end {
        return Err(invalid());
    }
    let from = byte_offset(doc, start).ok_or_else(invalid)?;
    let to = byte_offset(doc, end).ok_or_else(invalid)?;

    let mut content = String::with_capacity(doc.len() - (to - from) + replacement.len());
    content.push_str(&doc[..from]);
    content.push_str(replacement);
    content.push_str(&doc[to..]);

    Ok(TextEdit {
        content,
        caret: start + replacement.chars().count(),
    })
}

/// Applies `format` to the selection `start..end` of `doc`.
///
/// # Errors
///
/// Returns [`MarknotesError::InvalidSelection`] if the selection does not lie
/// within the document.
pub fn apply_format(doc: &str, start: usize, end: usize, format: MarkdownFormat) -> Result<TextEdit> {
    let selected: String = doc
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();
    let selected = if selected.is_empty() { PLACEHOLDER } else { &selected };
    replace_selection(doc, start, end, &format.transform(selected))
}

/// Applies the format named `name`, leaving the document untouched when the
/// name is not a known format.
///
/// # Errors
///
/// Returns [`MarknotesError::InvalidSelection`] if `name` is known and the
/// selection does not lie within the document.
pub fn apply_named_format(doc: &str, start: usize, end: usize, name: &str) -> Result<TextEdit> {
    match name.parse::<MarkdownFormat>() {
        Ok(format) => apply_format(doc, start, end, format),
        Err(_) => {
            log::debug!("ignoring unknown format command {name:?}");
            Ok(TextEdit {
                content: doc.to_string(),
                caret: end,
            })
        }
    }
}

/// Replaces the selection with [`TAB_INDENT`], placing the caret after it.
///
/// # Errors
///
/// Returns [`MarknotesError::InvalidSelection`] if the selection does not lie
/// within the document.
pub fn insert_tab(doc: &str, start: usize, end: usize) -> Result<TextEdit> {
    replace_selection(doc, start, end, TAB_INDENT)
}

/// A toolbar button: the command it runs and the shortcut hint it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarItem {
    pub format: MarkdownFormat,
    pub shortcut: &'static str,
}

/// Toolbar buttons, grouped; groups are rendered with separators between them.
pub const TOOLBAR: &[&[ToolbarItem]] = &[
    &[
        ToolbarItem { format: MarkdownFormat::Bold, shortcut: "Ctrl+B" },
        ToolbarItem { format: MarkdownFormat::Italic, shortcut: "Ctrl+I" },
    ],
    &[
        ToolbarItem { format: MarkdownFormat::Heading1, shortcut: "Ctrl+1" },
        ToolbarItem { format: MarkdownFormat::Heading2, shortcut: "Ctrl+2" },
        ToolbarItem { format: MarkdownFormat::Heading3, shortcut: "Ctrl+3" },
    ],
    &[
        ToolbarItem { format: MarkdownFormat::BulletList, shortcut: "Ctrl+8" },
        ToolbarItem { format: MarkdownFormat::NumberedList, shortcut: "Ctrl+9" },
    ],
    &[
        ToolbarItem { format: MarkdownFormat::Code, shortcut: "Ctrl+`" },
        ToolbarItem { format: MarkdownFormat::Quote, shortcut: "Ctrl+Shift+." },
    ],
    &[
        ToolbarItem { format: MarkdownFormat::Link, shortcut: "Ctrl+K" },
        ToolbarItem { format: MarkdownFormat::Image, shortcut: "Ctrl+Shift+I" },
    ],
];
