//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `notes_core::storage`.
//!
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: BTreeMap-backed backend for tests (`inmemory` feature)

pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
