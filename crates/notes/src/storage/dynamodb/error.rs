//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `notes_core::storage`.
//! Timeouts and dispatch failures become `ConnectionFailed`; everything the
//! service answered with becomes `QueryFailed`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{BuildError, DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use notes_core::storage::RepositoryError;

/// Map an UpdateItem SDK error to RepositoryError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> RepositoryError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        UpdateItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a request builder error to RepositoryError.
pub fn map_build_error(err: BuildError) -> RepositoryError {
    RepositoryError::Serialization(format!("Invalid request: {}", err))
}

fn connection_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError>
where
    E: std::error::Error + 'static,
    R: Debug,
{
    match err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => Some(
            RepositoryError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ProvisionedThroughputExceededException, ResourceNotFoundException,
    };

    #[test]
    fn test_timeout_is_connection_failure() {
        let err: SdkError<ScanError, ()> = SdkError::timeout_error("request timed out");

        assert!(matches!(
            map_scan_error(err),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_missing_table_is_query_failure() {
        let err: SdkError<QueryError, ()> = SdkError::service_error(
            QueryError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            ),
            (),
        );

        assert_eq!(
            map_query_error(err),
            RepositoryError::QueryFailed("Table not found".to_string())
        );
    }

    #[test]
    fn test_throttling_is_query_failure() {
        let err: SdkError<UpdateItemError, ()> = SdkError::service_error(
            UpdateItemError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
            (),
        );

        assert_eq!(
            map_update_item_error(err),
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        );
    }

    #[test]
    fn test_construction_failure_is_query_failure() {
        let err: SdkError<UpdateItemError, ()> =
            SdkError::construction_failure("missing table name");

        let mapped = map_update_item_error(err);

        assert!(mapped.is_store_failure());
        assert!(matches!(mapped, RepositoryError::QueryFailed(_)));
    }
}
