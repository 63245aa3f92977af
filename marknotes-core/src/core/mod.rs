//! Internal domain modules for the Marknotes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod cheatsheet;
pub mod clipboard;
pub mod debounce;
pub mod error;
pub mod export;
pub mod format;
pub mod note;
pub mod preview;
pub mod session;
pub mod settings;
pub mod shortcut;
pub mod stats;
pub mod store;

#[doc(inline)]
pub use cheatsheet::{CheatSheetEntry, CheatSheetSection, CHEAT_SHEET};
#[doc(inline)]
pub use clipboard::{copy_to_clipboard, Clipboard, MemoryClipboard};
#[doc(inline)]
pub use debounce::{Debouncer, AUTOSAVE_DELAY};
#[doc(inline)]
pub use error::{MarknotesError, Result};
#[doc(inline)]
pub use export::{
    export_as_html, export_as_html_with, export_as_markdown, export_as_text, export_note,
    file_stem_for_title, write_export, ExportFormat, ExportedFile, HtmlExportMode,
};
#[doc(inline)]
pub use format::{
    apply_format, apply_named_format, insert_tab, replace_selection, MarkdownFormat, TextEdit,
    ToolbarItem, PLACEHOLDER, TAB_INDENT, TOOLBAR,
};
#[doc(inline)]
pub use note::{format_relative_time, generate_unique_id, Note, ViewMode};
#[doc(inline)]
pub use preview::{render_markdown_to_html, scroll_fraction, scroll_offset};
#[doc(inline)]
pub use session::EditorSession;
#[doc(inline)]
pub use settings::{
    default_export_directory, load_settings, load_settings_from, save_settings, save_settings_to,
    settings_file_path, AppSettings,
};
#[doc(inline)]
pub use shortcut::{format_for_key, KeyPress, Platform};
#[doc(inline)]
pub use stats::{count_characters, count_words, pluralize};
#[doc(inline)]
pub use store::{NoteStore, WELCOME_TITLE};
