//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository traits
//! using `aws-sdk-dynamodb`. The repository talks to DynamoDB through one
//! capability trait per operation (see [`api`]), so tests can swap in fakes.

pub mod api;
mod conversions;
mod error;
mod expressions;
mod keys;
mod repository;

pub use api::{QueryApi, ScanApi, UpdateItemApi};
pub use conversions::{item_to_note, note_to_item};
pub use repository::DynamoDbRepository;
