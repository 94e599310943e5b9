//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::{RepositoryError, ValidationError};

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `Validation(MissingTableName)` -> 500 (the function is misconfigured)
/// - `Validation(_)` -> 400 (Bad Request)
/// - `ConnectionFailed` -> 502 (Bad Gateway)
/// - `QueryFailed` -> 502 (Bad Gateway)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use notes_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 502);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::Validation(ValidationError::MissingTableName) => 500,
        RepositoryError::Validation(_) => 400,
        RepositoryError::ConnectionFailed(_) => 502,
        RepositoryError::QueryFailed(_) => 502,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_table_name_maps_to_500() {
        let error = RepositoryError::Validation(ValidationError::MissingTableName);
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_missing_field_maps_to_400() {
        let error = RepositoryError::Validation(ValidationError::MissingField("owner"));
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_malformed_maps_to_400() {
        let error = RepositoryError::Validation(ValidationError::Malformed("eof".to_string()));
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_store_failures_map_to_502() {
        let error = RepositoryError::ConnectionFailed("timeout".to_string());
        assert_eq!(repository_error_to_status_code(&error), 502);

        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(repository_error_to_status_code(&error), 502);
    }

    #[test]
    fn test_decode_failures_map_to_500() {
        let error = RepositoryError::Serialization("bad json".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);

        let error = RepositoryError::InvalidData("Missing or invalid field: owner".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
