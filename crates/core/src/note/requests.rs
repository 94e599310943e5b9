//! API request types for note operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use crate::storage::ValidationError;

use super::types::Note;

/// Request payload for writing a note.
///
/// Any `timestamp` field sent by a client is ignored; the repository assigns
/// one on every write. Capitalized keys (`Owner`, `Title`, `Message`) are
/// accepted for clients of the earlier API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNote {
    #[serde(alias = "Owner")]
    pub owner: String,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Message")]
    pub message: String,
}

impl CreateNote {
    pub fn new(
        owner: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            title: title.into(),
            message: message.into(),
        }
    }

    /// Rejects requests with an empty owner, title or message.
    ///
    /// The repository does not guard these fields itself: an empty title
    /// would collide with every other empty-title note of the same owner.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.owner.is_empty() {
            return Err(ValidationError::MissingField("owner"));
        }
        if self.title.is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.message.is_empty() {
            return Err(ValidationError::MissingField("message"));
        }
        Ok(())
    }

    /// Convert into an unwritten Note.
    pub fn into_note(self) -> Note {
        Note::new(self.owner, self.title, self.message)
    }
}
