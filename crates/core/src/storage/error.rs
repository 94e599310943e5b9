use thiserror::Error;

/// Generic text shown to callers instead of store failure details.
pub const STORE_FAILURE_MESSAGE: &str = "a DynamoDB error occurred";

/// Required input that is missing or malformed.
///
/// Always detected before any call to the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("table name must be provided")]
    MissingTableName,
    #[error("{0} must be provided")]
    MissingField(&'static str),
    #[error("Malformed input: {0}")]
    Malformed(String),
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// True when the backing store call itself failed.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::ConnectionFailed(_) | RepositoryError::QueryFailed(_)
        )
    }

    /// Message safe to return to end users.
    ///
    /// Store failure details stay in the logs.
    pub fn public_message(&self) -> String {
        if self.is_store_failure() {
            STORE_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
