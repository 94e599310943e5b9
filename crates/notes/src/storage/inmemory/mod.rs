//! In-memory storage backend for testing.
//!
//! Keeps notes in a `BTreeMap` keyed by `(owner, title)` wrapped in
//! `Arc<RwLock<_>>`. The key order mirrors the table's partition/sort key,
//! so owner queries come back ordered by title like they do in DynamoDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use notes::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
