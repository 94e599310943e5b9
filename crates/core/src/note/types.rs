use serde::{Deserialize, Serialize};

/// A note keyed by `(owner, title)`.
///
/// `owner` is the partition key and `title` the sort key of the backing
/// table. `timestamp` is assigned by the repository on every write (seconds
/// since the Unix epoch); whatever a caller puts there is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub owner: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: i64,
}

impl Note {
    /// Creates a note that has not been written yet (timestamp 0).
    pub fn new(
        owner: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            title: title.into(),
            message: message.into(),
            timestamp: 0,
        }
    }

    /// Sets the timestamp.
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Response body of the notes reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNotesResponse {
    pub notes: Vec<Note>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_new_has_zero_timestamp() {
        let note = Note::new("a", "t1", "hello");

        assert_eq!(note.owner, "a");
        assert_eq!(note.title, "t1");
        assert_eq!(note.message, "hello");
        assert_eq!(note.timestamp, 0);
    }

    #[test]
    fn test_note_deserialize_without_timestamp() {
        let json = r#"{"owner": "a", "title": "t1", "message": "hello"}"#;
        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note, Note::new("a", "t1", "hello"));
    }

    #[test]
    fn test_list_response_shape() {
        let response = ListNotesResponse {
            notes: vec![Note::new("a", "t1", "hello").with_timestamp(1700000000)],
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "notes": [{
                    "owner": "a",
                    "title": "t1",
                    "message": "hello",
                    "timestamp": 1700000000
                }]
            })
        );
    }
}
