//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and notes.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use notes_core::note::Note;
use notes_core::storage::RepositoryError;

use super::keys::{MESSAGE, OWNER, TIMESTAMP, TITLE};

/// Convert a Note to a DynamoDB item.
pub fn note_to_item(note: &Note) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (OWNER.to_string(), AttributeValue::S(note.owner.clone())),
        (TITLE.to_string(), AttributeValue::S(note.title.clone())),
        (MESSAGE.to_string(), AttributeValue::S(note.message.clone())),
        (
            TIMESTAMP.to_string(),
            AttributeValue::N(note.timestamp.to_string()),
        ),
    ])
}

/// Convert a DynamoDB item to a Note.
pub fn item_to_note(item: &HashMap<String, AttributeValue>) -> Result<Note, RepositoryError> {
    Ok(Note {
        owner: get_string(item, OWNER)?,
        title: get_string(item, TITLE)?,
        message: get_string(item, MESSAGE)?,
        timestamp: get_i64(item, TIMESTAMP)?,
    })
}

/// Convert a page of items, failing on the first item that does not decode.
pub fn items_to_notes(
    items: &[HashMap<String, AttributeValue>],
) -> Result<Vec<Note>, RepositoryError> {
    items.iter().map(item_to_note).collect()
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required integer attribute.
fn get_i64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| {
            RepositoryError::InvalidData(format!("Missing or invalid field: {}", key))
        })?;
    n.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        Note::new("owner", "title", "message").with_timestamp(1700000000)
    }

    #[test]
    fn test_note_round_trip() {
        let note = sample_note();
        let item = note_to_item(&note);
        let parsed = item_to_note(&item).unwrap();

        assert_eq!(note, parsed);
    }

    #[test]
    fn test_note_item_shape() {
        let item = note_to_item(&sample_note());

        assert_eq!(item.len(), 4);
        assert_eq!(item.get("owner").unwrap().as_s().unwrap(), "owner");
        assert_eq!(item.get("title").unwrap().as_s().unwrap(), "title");
        assert_eq!(item.get("message").unwrap().as_s().unwrap(), "message");
        assert_eq!(item.get("timestamp").unwrap().as_n().unwrap(), "1700000000");
    }

    #[test]
    fn test_missing_field_is_invalid_data() {
        let mut item = note_to_item(&sample_note());
        item.remove("message");

        assert_eq!(
            item_to_note(&item),
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: message".to_string()
            ))
        );
    }

    #[test]
    fn test_wrong_attribute_type_is_invalid_data() {
        let mut item = note_to_item(&sample_note());
        item.insert("timestamp".to_string(), AttributeValue::S("yesterday".to_string()));

        assert!(matches!(
            item_to_note(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_unparsable_number_is_invalid_data() {
        let mut item = note_to_item(&sample_note());
        item.insert("timestamp".to_string(), AttributeValue::N("1.5e3".to_string()));

        assert!(matches!(
            item_to_note(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_items_to_notes_fails_whole_page() {
        let good = note_to_item(&sample_note());
        let mut bad = note_to_item(&sample_note());
        bad.remove("owner");

        assert!(items_to_notes(&[good.clone(), bad]).is_err());
        assert_eq!(items_to_notes(&[good]).unwrap().len(), 1);
        assert!(items_to_notes(&[]).unwrap().is_empty());
    }
}
