//! Notes service: DynamoDB storage and the Lambda handlers built on it.
//!
//! The three binaries (`notes-writer`, `notes-reader`, `deploy-hook`) are thin
//! shells that build their clients once, then hand every invocation to the
//! functions in [`handlers`].

pub mod client;
pub mod config;
pub mod handlers;
pub mod storage;
pub mod telemetry;
