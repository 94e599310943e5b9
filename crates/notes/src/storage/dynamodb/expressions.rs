//! DynamoDB expression builders.
//!
//! `owner` and `timestamp` are DynamoDB reserved words, so every attribute
//! is referenced through a `#name` placeholder and every value through a
//! `:value` placeholder.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use super::keys::{MESSAGE, OWNER, TIMESTAMP};

/// An expression string together with its placeholder maps.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Update expression that sets a note's message and timestamp.
///
/// Only the two mutable fields are touched; the key attributes come from
/// the item key, so the write creates the note when it is missing.
pub fn note_update(message: &str, timestamp: i64) -> Expression {
    Expression {
        expression: format!("SET #{MESSAGE} = :{MESSAGE}, #{TIMESTAMP} = :{TIMESTAMP}"),
        names: HashMap::from([
            (format!("#{MESSAGE}"), MESSAGE.to_string()),
            (format!("#{TIMESTAMP}"), TIMESTAMP.to_string()),
        ]),
        values: HashMap::from([
            (format!(":{MESSAGE}"), AttributeValue::S(message.to_string())),
            (
                format!(":{TIMESTAMP}"),
                AttributeValue::N(timestamp.to_string()),
            ),
        ]),
    }
}

/// Key condition matching every note of one owner.
pub fn owner_key_condition(owner: &str) -> Expression {
    Expression {
        expression: format!("#{OWNER} = :{OWNER}"),
        names: HashMap::from([(format!("#{OWNER}"), OWNER.to_string())]),
        values: HashMap::from([(format!(":{OWNER}"), AttributeValue::S(owner.to_string()))]),
    }
}
