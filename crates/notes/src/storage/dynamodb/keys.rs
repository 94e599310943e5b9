//! DynamoDB key generation functions.
//!
//! The notes table uses a composite primary key: `owner` is the partition
//! key and `title` the sort key. All functions are sync and have no side
//! effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

// ============================================================================
// Attribute names
// ============================================================================

pub const OWNER: &str = "owner";
pub const TITLE: &str = "title";
pub const MESSAGE: &str = "message";
pub const TIMESTAMP: &str = "timestamp";

/// Generate the primary key of a note.
///
/// Empty strings are passed through untouched; DynamoDB rejects them as
/// key values and that rejection is reported as a store failure.
pub fn note_key(owner: &str, title: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (OWNER.to_string(), AttributeValue::S(owner.to_string())),
        (TITLE.to_string(), AttributeValue::S(title.to_string())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_key_has_both_parts() {
        let key = note_key("foo", "titlefoo");

        assert_eq!(key.len(), 2);
        assert_eq!(key.get("owner").unwrap().as_s().unwrap(), "foo");
        assert_eq!(key.get("title").unwrap().as_s().unwrap(), "titlefoo");
    }

    #[test]
    fn test_note_key_keeps_empty_owner() {
        let key = note_key("", "t");

        assert_eq!(key.get("owner").unwrap().as_s().unwrap(), "");
    }
}
