use async_trait::async_trait;

use crate::note::Note;

use super::Result;

/// Repository for writing notes.
#[async_trait]
pub trait NoteWriter: Send + Sync {
    /// Upserts a note by `(owner, title)`, setting its message and a fresh
    /// timestamp. Returns the owner.
    async fn put_note(&self, note: &Note) -> Result<String>;
}

/// Repository for reading notes.
#[async_trait]
pub trait NoteReader: Send + Sync {
    /// Gets up to [`SCAN_LIMIT`](super::SCAN_LIMIT) notes in store order.
    async fn scan_notes(&self) -> Result<Vec<Note>>;

    /// Gets up to [`QUERY_LIMIT`](super::QUERY_LIMIT) notes of one owner.
    async fn find_notes_by_owner(&self, owner: &str) -> Result<Vec<Note>>;
}
