//! Core library for Marknotes, an in-memory markdown note-taking application.
//!
//! The primary entry point is [`EditorSession`], which owns a [`NoteStore`]
//! and auto-saves the active note after typing goes quiet. All note mutations
//! go through `NoteStore` methods; formatting commands are pure functions over
//! the note's text ([`apply_format`]).
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.
//!
//! ```
//! use marknotes_core::{file_stem_for_title, load_settings_from, replace_selection, save_settings_to, AppSettings};
//!
//! let edit = replace_selection("hello world", 6, 11, "there").unwrap();
//! assert_eq!(edit.content, "hello there");
//! assert_eq!(file_stem_for_title("a/b"), "a-b");
//!
//! let dir = std::env::temp_dir().join(format!("marknotes-doc-{}", std::process::id()));
//! let path = dir.join("settings.json");
//! save_settings_to(&path, &AppSettings::default()).unwrap();
//! assert_eq!(load_settings_from(&path), AppSettings::default());
//! # std::fs::remove_dir_all(&dir).ok();
//! ```

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use crate::core::{
    cheatsheet::{CheatSheetEntry, CheatSheetSection, CHEAT_SHEET},
    clipboard::{copy_to_clipboard, Clipboard, MemoryClipboard},
    debounce::{Debouncer, AUTOSAVE_DELAY},
    error::{MarknotesError, Result},
    export::{
        export_as_html, export_as_html_with, export_as_markdown, export_as_text, export_note,
        file_stem_for_title, write_export, ExportFormat, ExportedFile, HtmlExportMode,
    },
    format::{
        apply_format, apply_named_format, insert_tab, replace_selection, MarkdownFormat,
        TextEdit, ToolbarItem, PLACEHOLDER, TAB_INDENT, TOOLBAR,
    },
    note::{format_relative_time, generate_unique_id, Note, ViewMode},
    preview::{render_markdown_to_html, scroll_fraction, scroll_offset},
    session::EditorSession,
    settings::{
        default_export_directory, load_settings, load_settings_from, save_settings,
        save_settings_to, settings_file_path, AppSettings,
    },
    shortcut::{format_for_key, KeyPress, Platform},
    stats::{count_characters, count_words, pluralize},
    store::{NoteStore, WELCOME_TITLE},
};
