//! The in-memory note collection and the active-note pointer.

use crate::core::note::{generate_unique_id, now_millis};
use crate::Note;

/// Title of the note seeded by [`NoteStore::with_welcome_note`].
pub const WELCOME_TITLE: &str = "Welcome to Markdown Notes";

const WELCOME_CONTENT: &str = r#"# Welcome to Markdown Notes! 📝

This is a powerful markdown editor with live preview and syntax highlighting.

## Features

- **Live Preview** - See your markdown rendered in real-time
- **Syntax Highlighting** - Beautiful code blocks with syntax highlighting
- **Auto-Save** - Your notes are automatically saved as you type
- **Export Options** - Export as .md, .html, or .txt
- **Dark Mode** - Toggle between light and dark themes
- **Keyboard Shortcuts** - Fast formatting with keyboard shortcuts

## Try it out!

Start typing in the editor to see the magic happen. You can:

1. Create new notes
2. Search through your notes
3. Format text with the toolbar
4. Export your notes

### Code Example

```javascript
function greet(name) {
  console.log(`Hello, ${name}!`);
}

greet('World');
```

### Lists

- Bullet points work
- Just like this
  - With nested items

### Blockquote

> "The best way to predict the future is to invent it." - Alan Kay

---

Happy note-taking! ✨"#;

/// An ordered collection of notes plus the id of the note being edited.
///
/// Newest notes are kept at the front. All mutations go through the methods
/// below; operations naming an id that is not in the collection are no-ops.
///
/// ```rust
/// use marknotes_core::NoteStore;
///
/// let mut store = NoteStore::new();
/// let id = store.create();
/// store.update_title(&id, "Groceries");
/// assert_eq!(store.active_note().unwrap().title, "Groceries");
///
/// store.delete(&id);
/// assert!(store.is_empty());
/// assert!(store.active_note_id().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    active_note_id: Option<String>,
}

impl NoteStore {
    /// Creates an empty store with no active note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single, active welcome note.
    pub fn with_welcome_note() -> Self {
        let note = Note::new(WELCOME_TITLE, WELCOME_CONTENT);
        Self {
            active_note_id: Some(note.id.clone()),
            notes: vec![note],
        }
    }

    /// All notes in display order (newest created first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn active_note_id(&self) -> Option<&str> {
        self.active_note_id.as_deref()
    }

    /// The note currently being edited, if any.
    pub fn active_note(&self) -> Option<&Note> {
        self.active_note_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// Inserts an empty note (no title, no content) at the front of the
    /// collection and makes it active.
    ///
    /// Returns the new note's id, which is distinct from every id in the store.
    pub fn create(&mut self) -> String {
        let mut id = generate_unique_id();
        while self.get(&id).is_some() {
            id = generate_unique_id();
        }

        let note = Note {
            id: id.clone(),
            title: String::new(),
            content: String::new(),
            last_edited: now_millis(),
        };
        self.notes.insert(0, note);
        self.active_note_id = Some(id.clone());
        log::debug!("created note {id}");
        id
    }

    /// Makes `id` the active note. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        if self.get(id).is_none() {
            log::warn!("ignoring select of unknown note {id}");
            return;
        }
        self.active_note_id = Some(id.to_string());
        log::debug!("selected note {id}");
    }

    /// Removes the note with `id`. Unknown ids are ignored.
    ///
    /// When the active note is removed, the first remaining note becomes
    /// active, or there is no active note if the collection is now empty.
    /// Deleting any other note leaves the active note unchanged.
    pub fn delete(&mut self, id: &str) {
        let Some(index) = self.notes.iter().position(|n| n.id == id) else {
            log::warn!("ignoring delete of unknown note {id}");
            return;
        };
        self.notes.remove(index);

        if self.active_note_id.as_deref() == Some(id) {
            self.active_note_id = self.notes.first().map(|n| n.id.clone());
        }
        log::debug!(
            "deleted note {id}; active is now {:?}",
            self.active_note_id
        );
    }

    /// Replaces the content of note `id` without touching `last_edited`.
    ///
    /// Live edits are transient until [`commit_autosave`](Self::commit_autosave)
    /// stamps them.
    pub fn update_content(&mut self, id: &str, content: impl Into<String>) {
        match self.get_mut(id) {
            Some(note) => note.content = content.into(),
            None => log::warn!("ignoring content update for unknown note {id}"),
        }
    }

    /// Replaces the title of note `id` and stamps `last_edited`.
    pub fn update_title(&mut self, id: &str, title: impl Into<String>) {
        match self.get_mut(id) {
            Some(note) => {
                note.title = title.into();
                note.last_edited = now_millis();
            }
            None => log::warn!("ignoring title update for unknown note {id}"),
        }
    }

    /// Commits debounced content for note `id` and stamps `last_edited`.
    pub fn commit_autosave(&mut self, id: &str, content: impl Into<String>) {
        match self.get_mut(id) {
            Some(note) => {
                note.content = content.into();
                note.last_edited = now_millis();
                log::debug!("auto-saved note {id}");
            }
            None => log::warn!("dropping auto-save for unknown note {id}"),
        }
    }

    /// Notes whose title or content contains `query`, ignoring case.
    ///
    /// Collection order is preserved; an empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
