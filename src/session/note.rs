//! Free-text note attached to the running phase.

use crate::types::Key;

/// Maximum number of characters a note can hold.
pub const NOTE_CAPACITY: usize = 79;

/// What a key did to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOutcome {
    /// Still editing
    Editing,
    /// Edit buffer became the note
    Committed,
    /// Edit buffer was discarded
    Cancelled,
}

/// Single-line note editor with a committed note and an edit buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEditor {
    editing: bool,
    note: String,
    buffer: String,
}

impl NoteEditor {
    /// Creates an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters edit mode, seeding the buffer with the committed note.
    pub fn begin(&mut self) {
        self.editing = true;
        self.buffer = self.note.chars().take(NOTE_CAPACITY).collect();
    }

    /// Leaves edit mode without touching the committed note.
    pub fn cancel(&mut self) {
        self.editing = false;
        self.buffer.clear();
    }

    /// Leaves edit mode, replacing the committed note with the buffer.
    pub fn commit(&mut self) {
        self.note = std::mem::take(&mut self.buffer);
        self.editing = false;
    }

    /// Applies one key while editing.
    ///
    /// Esc cancels, Enter commits, Backspace deletes, printable ASCII is
    /// appended up to [`NOTE_CAPACITY`]. Everything else is ignored.
    pub fn handle_key(&mut self, key: Key) -> NoteOutcome {
        if !self.editing {
            return NoteOutcome::Cancelled;
        }
        match key {
            Key::Esc => {
                self.cancel();
                return NoteOutcome::Cancelled;
            }
            Key::Enter => {
                self.commit();
                return NoteOutcome::Committed;
            }
            Key::Backspace => {
                self.buffer.pop();
            }
            Key::Char(c) if (' '..='~').contains(&c) => {
                if self.buffer.len() < NOTE_CAPACITY {
                    self.buffer.push(c);
                }
            }
            Key::Char(_) | Key::Eof => {}
        }
        NoteOutcome::Editing
    }

    /// Returns the committed note and clears it.
    pub fn take_note(&mut self) -> String {
        std::mem::take(&mut self.note)
    }

    /// Returns true while the edit buffer is open.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Committed note.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Text being edited.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
