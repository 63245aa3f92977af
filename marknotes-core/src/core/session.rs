//! An editing session: the note store plus debounced auto-save.
//!
//! Input flows through [`EditorSession`] the way the editor drives it: a
//! keystroke, toolbar click or shortcut produces new content for the active
//! note, the content is written to the store immediately, and an auto-save is
//! scheduled. The host calls [`EditorSession::tick`] from its event loop; once
//! the input has been quiet for the auto-save delay, the latest content is
//! committed and the note's edit time is stamped.

use std::time::{Duration, Instant};

use crate::core::format::{self, TextEdit};
use crate::core::shortcut::{format_for_key, KeyPress, Platform};
use crate::core::stats::{count_characters, count_words};
use crate::{
    copy_to_clipboard, export_note, AppSettings, Clipboard, Debouncer, ExportFormat,
    ExportedFile, HtmlExportMode, MarkdownFormat, Note, NoteStore, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSave {
    note_id: String,
    content: String,
}

/// The note store together with the auto-save timer for the active note.
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use marknotes_core::{EditorSession, MarkdownFormat, NoteStore};
///
/// let mut session = EditorSession::new(NoteStore::new());
/// session.create_note();
///
/// let t0 = Instant::now();
/// session.edit_content("hello", t0);
/// let caret = session.apply_format(MarkdownFormat::Bold, 0, 5, t0).unwrap();
/// assert_eq!(caret, Some(9));
///
/// assert!(!session.tick(t0 + Duration::from_millis(100)));
/// assert!(session.tick(t0 + Duration::from_millis(500)));
/// assert_eq!(session.store().active_note().unwrap().content, "**hello**");
/// ```
#[derive(Debug, Clone)]
pub struct EditorSession {
    store: NoteStore,
    autosave: Debouncer<PendingSave>,
    html_export: HtmlExportMode,
}

impl EditorSession {
    /// Wraps `store` with the default auto-save delay.
    pub fn new(store: NoteStore) -> Self {
        Self::with_autosave_delay(store, crate::AUTOSAVE_DELAY)
    }

    pub fn with_autosave_delay(store: NoteStore, delay: Duration) -> Self {
        Self {
            store,
            autosave: Debouncer::new(delay),
            html_export: HtmlExportMode::default(),
        }
    }

    /// Wraps `store` using the auto-save delay and HTML export mode from `settings`.
    pub fn from_settings(store: NoteStore, settings: &AppSettings) -> Self {
        Self {
            html_export: settings.html_export,
            ..Self::with_autosave_delay(store, settings.autosave_delay())
        }
    }

    /// What HTML exports of the active note embed.
    pub fn html_export_mode(&self) -> HtmlExportMode {
        self.html_export
    }

    pub fn set_html_export_mode(&mut self, mode: HtmlExportMode) {
        self.html_export = mode;
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.store.active_note()
    }

    /// Whether an edit is waiting to be auto-saved.
    pub fn has_pending_save(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Replaces the active note's content and restarts the auto-save timer.
    ///
    /// Does nothing when no note is active.
    pub fn edit_content(&mut self, content: impl Into<String>, now: Instant) {
        let Some(id) = self.store.active_note_id().map(str::to_string) else {
            return;
        };
        let content = content.into();
        self.store.update_content(&id, content.clone());
        self.autosave.schedule(PendingSave { note_id: id, content }, now);
    }

    fn apply_edit(&mut self, edit: TextEdit, now: Instant) -> usize {
        self.edit_content(edit.content, now);
        edit.caret
    }

    /// Formats the selection `start..end` of the active note.
    ///
    /// Returns the new caret position, or `None` when no note is active.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MarknotesError::InvalidSelection`] if the selection
    /// does not lie within the note's content.
    pub fn apply_format(
        &mut self,
        format: MarkdownFormat,
        start: usize,
        end: usize,
        now: Instant,
    ) -> Result<Option<usize>> {
        let Some(note) = self.store.active_note() else {
            return Ok(None);
        };
        let edit = format::apply_format(&note.content, start, end, format)?;
        Ok(Some(self.apply_edit(edit, now)))
    }

    /// Formats the selection using a command name from the toolbar.
    ///
    /// Unknown names leave the note untouched and return `None`.
    ///
    /// # Errors
    ///
    /// See [`apply_format`](Self::apply_format).
    pub fn apply_named_format(
        &mut self,
        name: &str,
        start: usize,
        end: usize,
        now: Instant,
    ) -> Result<Option<usize>> {
        match name.parse::<MarkdownFormat>() {
            Ok(format) => self.apply_format(format, start, end, now),
            Err(_) => {
                log::debug!("ignoring unknown format command {name:?}");
                Ok(None)
            }
        }
    }

    /// Handles the Tab key: replaces the selection with two spaces.
    ///
    /// # Errors
    ///
    /// See [`apply_format`](Self::apply_format).
    pub fn insert_tab(&mut self, start: usize, end: usize, now: Instant) -> Result<Option<usize>> {
        let Some(note) = self.store.active_note() else {
            return Ok(None);
        };
        let edit = format::insert_tab(&note.content, start, end)?;
        Ok(Some(self.apply_edit(edit, now)))
    }

    /// Dispatches a formatting shortcut. Keys without a binding return `None`.
    ///
    /// # Errors
    ///
    /// See [`apply_format`](Self::apply_format).
    pub fn handle_key(
        &mut self,
        press: &KeyPress,
        platform: Platform,
        start: usize,
        end: usize,
        now: Instant,
    ) -> Result<Option<usize>> {
        match format_for_key(press, platform) {
            Some(format) => self.apply_format(format, start, end, now),
            None => Ok(None),
        }
    }

    /// Commits a due auto-save. Returns whether a note was saved.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.autosave.poll(now) {
            Some(pending) => self.commit(pending),
            None => false,
        }
    }

    /// Commits any pending auto-save immediately. Returns whether a note was saved.
    pub fn flush_autosave(&mut self) -> bool {
        match self.autosave.flush() {
            Some(pending) => self.commit(pending),
            None => false,
        }
    }

    fn commit(&mut self, pending: PendingSave) -> bool {
        if self.store.get(&pending.note_id).is_none() {
            log::debug!("note {} was deleted before auto-save", pending.note_id);
            return false;
        }
        self.store.commit_autosave(&pending.note_id, pending.content);
        true
    }

    /// Creates a note and makes it active, saving the previous note first.
    pub fn create_note(&mut self) -> String {
        self.flush_autosave();
        self.store.create()
    }

    /// Switches to note `id`, saving the previous note first.
    pub fn select_note(&mut self, id: &str) {
        self.flush_autosave();
        self.store.select(id);
    }

    /// Deletes note `id`, saving any pending edit first.
    pub fn delete_note(&mut self, id: &str) {
        self.flush_autosave();
        self.store.delete(id);
    }

    /// Renames the active note.
    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(id) = self.store.active_note_id().map(str::to_string) {
            self.store.update_title(&id, title);
        }
    }

    /// Word count of the active note, or 0 when no note is active.
    pub fn word_count(&self) -> usize {
        self.active_note().map_or(0, |n| count_words(&n.content))
    }

    /// Character count of the active note, or 0 when no note is active.
    pub fn char_count(&self) -> usize {
        self.active_note().map_or(0, |n| count_characters(&n.content))
    }

    /// Copies the active note's content. Returns `false` on failure or without an active note.
    pub fn copy_active(&self, clipboard: &mut dyn Clipboard) -> bool {
        match self.active_note() {
            Some(note) => copy_to_clipboard(clipboard, &note.content),
            None => false,
        }
    }

    /// Exports the active note as it currently appears in the editor.
    ///
    /// HTML exports follow [`html_export_mode`](Self::html_export_mode).
    pub fn export_active(&self, format: ExportFormat) -> Option<ExportedFile> {
        self.active_note()
            .map(|note| export_note(format, &note.title, &note.content, self.html_export))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MarknotesError, MemoryClipboard};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn session_with_note() -> (EditorSession, String) {
        let mut session = EditorSession::new(NoteStore::new());
        let id = session.create_note();
        (session, id)
    }

    #[test]
    fn test_edit_is_visible_immediately_and_stamped_later() {
        let (mut session, id) = session_with_note();
        session.store.get_mut(&id).unwrap().last_edited = 0;
        let t0 = Instant::now();

        session.edit_content("draft", t0);
        let note = session.store().get(&id).unwrap();
        assert_eq!(note.content, "draft");
        assert_eq!(note.last_edited, 0);
        assert!(session.has_pending_save());

        assert!(!session.tick(t0 + ms(499)));
        assert_eq!(session.store().get(&id).unwrap().last_edited, 0);

        assert!(session.tick(t0 + ms(500)));
        assert!(!session.has_pending_save());
        assert!(session.store().get(&id).unwrap().last_edited > 0);
    }

    #[test]
    fn test_rapid_edits_commit_once_with_last_value() {
        let (mut session, id) = session_with_note();
        let t0 = Instant::now();
        let mut commits = 0;

        for (i, text) in ["o", "on", "one"].into_iter().enumerate() {
            let at = t0 + ms(100 * i as u64);
            if session.tick(at) {
                commits += 1;
            }
            session.edit_content(text, at);
        }
        for t in (200..=2000).step_by(100) {
            if session.tick(t0 + ms(t)) {
                commits += 1;
            }
        }
        assert_eq!(commits, 1);
        assert_eq!(session.store().get(&id).unwrap().content, "one");
    }

    #[test]
    fn test_without_active_note_edits_are_ignored() {
        let mut session = EditorSession::new(NoteStore::new());
        let t0 = Instant::now();
        session.edit_content("lost", t0);
        assert!(!session.has_pending_save());
        assert_eq!(session.apply_format(MarkdownFormat::Bold, 0, 0, t0).unwrap(), None);
        assert_eq!(session.insert_tab(0, 0, t0).unwrap(), None);
        assert_eq!(session.word_count(), 0);
        assert!(session.export_active(ExportFormat::Markdown).is_none());
    }

    #[test]
    fn test_format_empty_selection_inserts_placeholder() {
        let (mut session, _) = session_with_note();
        let t0 = Instant::now();
        session.edit_content("ab", t0);
        let caret = session.apply_format(MarkdownFormat::Bold, 1, 1, t0).unwrap();
        assert_eq!(caret, Some(9));
        assert_eq!(session.active_note().unwrap().content, "a**text**b");
    }

    #[test]
    fn test_named_format_and_unknown_name() {
        let (mut session, _) = session_with_note();
        let t0 = Instant::now();
        session.edit_content("hello", t0);

        assert_eq!(session.apply_named_format("blink", 0, 5, t0).unwrap(), None);
        assert_eq!(session.active_note().unwrap().content, "hello");

        assert_eq!(session.apply_named_format("italic", 0, 5, t0).unwrap(), Some(7));
        assert_eq!(session.active_note().unwrap().content, "*hello*");
    }

    #[test]
    fn test_invalid_selection_leaves_note_untouched() {
        let (mut session, _) = session_with_note();
        let t0 = Instant::now();
        session.edit_content("abc", t0);
        let result = session.apply_format(MarkdownFormat::Code, 1, 10, t0);
        assert!(matches!(result, Err(MarknotesError::InvalidSelection { .. })));
        assert_eq!(session.active_note().unwrap().content, "abc");
    }

    #[test]
    fn test_tab_key() {
        let (mut session, _) = session_with_note();
        let t0 = Instant::now();
        session.edit_content("- item", t0);
        assert_eq!(session.insert_tab(0, 0, t0).unwrap(), Some(2));
        assert_eq!(session.active_note().unwrap().content, "  - item");
    }

    #[test]
    fn test_shortcut_dispatch() {
        let (mut session, _) = session_with_note();
        let t0 = Instant::now();
        session.edit_content("title", t0);

        let caret = session
            .handle_key(&KeyPress::ctrl("2"), Platform::Other, 0, 5, t0)
            .unwrap();
        assert_eq!(caret, Some(8));
        assert_eq!(session.active_note().unwrap().content, "## title");

        let caret = session
            .handle_key(&KeyPress::ctrl("z"), Platform::Other, 0, 0, t0)
            .unwrap();
        assert_eq!(caret, None);
    }

    #[test]
    fn test_switching_notes_flushes_pending_save() {
        let (mut session, first) = session_with_note();
        let t0 = Instant::now();
        session.edit_content("unsaved", t0);

        let second = session.create_note();
        assert!(!session.has_pending_save());
        assert_eq!(session.store().get(&first).unwrap().content, "unsaved");
        assert_eq!(session.store().active_note_id(), Some(second.as_str()));

        session.select_note(&first);
        assert_eq!(session.active_note().unwrap().id, first);
    }

    #[test]
    fn test_delete_saves_pending_edit_then_removes_note() {
        let mut store = NoteStore::new();
        let id = store.create();
        let mut session = EditorSession::new(store);
        let t0 = Instant::now();
        session.edit_content("bye", t0);
        session.delete_note(&id);

        assert!(session.store().is_empty());
        assert!(!session.tick(t0 + ms(1000)));
    }

    #[test]
    fn test_custom_delay() {
        let mut session = EditorSession::with_autosave_delay(NoteStore::new(), ms(50));
        session.create_note();
        let t0 = Instant::now();
        session.edit_content("x", t0);
        assert!(session.tick(t0 + ms(50)));
    }

    #[test]
    fn test_title_counts_copy_and_export() {
        let (mut session, _) = session_with_note();
        let t0 = Instant::now();
        session.set_title("Plan");
        session.edit_content("one two  three", t0);

        assert_eq!(session.word_count(), 3);
        assert_eq!(session.char_count(), 14);

        let mut clipboard = MemoryClipboard::new();
        assert!(session.copy_active(&mut clipboard));
        assert_eq!(clipboard.contents(), Some("one two  three"));

        let file = session.export_active(ExportFormat::Markdown).unwrap();
        assert_eq!(file.filename, "Plan.md");
        assert_eq!(file.contents, "one two  three");
    }

    #[test]
    fn test_from_settings_applies_delay_and_html_mode() {
        let settings = AppSettings {
            autosave_delay_ms: 1200,
            html_export: HtmlExportMode::Rendered,
            ..AppSettings::default()
        };
        let mut session = EditorSession::from_settings(NoteStore::new(), &settings);
        assert_eq!(session.html_export_mode(), HtmlExportMode::Rendered);

        session.create_note();
        let t0 = Instant::now();
        session.edit_content("**bold**", t0);
        assert!(!session.tick(t0 + ms(500)));
        assert!(session.tick(t0 + ms(1200)));

        let file = session.export_active(ExportFormat::Html).unwrap();
        assert!(file.contents.contains("<strong>bold</strong>"));

        session.set_html_export_mode(HtmlExportMode::Raw);
        let file = session.export_active(ExportFormat::Html).unwrap();
        assert!(file.contents.contains("<body>\n**bold**\n</body>"));
    }
}
