//! In-memory note store.
//!
//! All notes live in a single map behind one exclusive lock. Every
//! operation takes the lock for its whole duration, so operations never
//! interleave (two concurrent `list` calls included). Guards are scoped
//! and released on every return path.

use std::collections::HashMap;

use parking_lot::Mutex;
use thiserror::Error;

use crate::note::Note;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No note with the given ID.
    #[error("note '{0}' not found")]
    NotFound(String),

    /// The supplied note is not acceptable.
    #[error("invalid note: {0}")]
    InvalidInput(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Lock-guarded mapping from note ID to note.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Mutex<HashMap<String, Note>>,
}

impl NoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored notes, in unspecified order.
    pub fn list(&self) -> Vec<Note> {
        let notes = self.notes.lock();
        notes.values().cloned().collect()
    }

    /// Look up a note by exact ID.
    pub fn get(&self, id: &str) -> StoreResult<Note> {
        let notes = self.notes.lock();
        notes
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Whether a note with the given ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.notes.lock().contains_key(id)
    }

    /// Store a note under its own ID.
    ///
    /// An existing note with the same ID is overwritten without error.
    pub fn create(&self, note: Note) -> StoreResult<Note> {
        let mut notes = self.notes.lock();
        if note.id.is_empty() {
            return Err(StoreError::InvalidInput("id must not be empty".to_string()));
        }
        notes.insert(note.id.clone(), note.clone());
        Ok(note)
    }

    /// Replace the note stored at `id`.
    ///
    /// The stored record always takes `id` as its ID; any ID carried by
    /// `note` is ignored.
    pub fn update(&self, id: &str, note: Note) -> StoreResult<()> {
        let mut notes = self.notes.lock();
        let slot = notes
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = Note {
            id: id.to_string(),
            content: note.content,
        };
        Ok(())
    }

    /// Remove the note stored at `id`.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut notes = self.notes.lock();
        notes
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    /// Whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.lock().is_empty()
    }
}
