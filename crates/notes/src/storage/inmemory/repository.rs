//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use notes_core::note::Note;
use notes_core::storage::{
    NoteReader, NoteWriter, RepositoryError, Result, ValidationError, QUERY_LIMIT, SCAN_LIMIT,
};

type NoteKey = (String, String);

/// In-memory storage backend for testing.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// Clones share the same underlying map.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    notes: Arc<RwLock<BTreeMap<NoteKey, Note>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            notes: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Creates a repository seeded with notes, keeping their timestamps.
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let notes = notes
            .into_iter()
            .map(|note| ((note.owner.clone(), note.title.clone()), note))
            .collect();
        Self {
            notes: Arc::new(RwLock::new(notes)),
        }
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    /// Returns true when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteWriter for InMemoryRepository {
    async fn put_note(&self, note: &Note) -> Result<String> {
        // Same rejection DynamoDB gives for an empty key attribute.
        if note.owner.is_empty() || note.title.is_empty() {
            return Err(RepositoryError::QueryFailed(
                "The AttributeValue for a key attribute cannot contain an empty string value"
                    .to_string(),
            ));
        }

        let stored = Note {
            timestamp: Utc::now().timestamp(),
            ..note.clone()
        };
        let mut notes = self.notes.write().await;
        notes.insert((note.owner.clone(), note.title.clone()), stored);
        Ok(note.owner.clone())
    }
}

#[async_trait]
impl NoteReader for InMemoryRepository {
    async fn scan_notes(&self) -> Result<Vec<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.values().take(SCAN_LIMIT as usize).cloned().collect())
    }

    async fn find_notes_by_owner(&self, owner: &str) -> Result<Vec<Note>> {
        if owner.is_empty() {
            return Err(ValidationError::MissingField("owner").into());
        }
        let notes = self.notes.read().await;
        Ok(notes
            .values()
            .filter(|n| n.owner == owner)
            .take(QUERY_LIMIT as usize)
            .cloned()
            .collect())
    }
}
