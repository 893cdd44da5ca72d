//! The note record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A note keyed by a caller-assigned identifier.
///
/// Missing fields decode as empty strings, so `{"content": "x"}` parses
/// into a note with an empty id (which the store then rejects on create).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    /// Note ID. Must be non-empty for a note to be stored.
    #[serde(default)]
    pub id: String,
    /// Free-form note content.
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Create a note.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}
