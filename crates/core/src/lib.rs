//! Core domain logic for the notes service.
//!
//! Pure types and contracts shared by the Lambda handlers, the storage
//! backends and the developer tooling. Nothing in this crate performs I/O.

pub mod hook;
pub mod note;
pub mod storage;
