use lambda_http::http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use lambda_http::{Body, Response};
use serde::{Deserialize, Serialize};

use notes_core::storage::{repository_error_to_status_code, RepositoryError};

/// JSON body returned with every error response.
///
/// Empty fields are left out of the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

fn is_zero(code: &u16) -> bool {
    *code == 0
}

impl ErrorBody {
    /// Builds the body for a repository error.
    ///
    /// `error_type` is the reason phrase of the mapped status; store failure
    /// details are replaced with a generic message.
    pub fn from_error(request_id: impl Into<String>, error: &RepositoryError) -> Self {
        let status = status_of(error);
        Self {
            request_id: request_id.into(),
            error_type: status.canonical_reason().unwrap_or_default().to_string(),
            status_code: status.as_u16(),
            message: error.public_message(),
        }
    }
}

fn status_of(error: &RepositoryError) -> StatusCode {
    StatusCode::from_u16(repository_error_to_status_code(error))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Logs the error and turns it into an HTTP response.
///
/// Store failures are logged at `error` with their details; everything
/// else at `warn`.
pub fn error_response(request_id: &str, error: &RepositoryError) -> Response<Body> {
    if error.is_store_failure() {
        tracing::error!(request_id, error = %error, "Store call failed");
    } else {
        tracing::warn!(request_id, error = %error, "Request rejected");
    }

    let body = ErrorBody::from_error(request_id, error);
    let mut response = Response::new(match serde_json::to_string(&body) {
        Ok(json) => Body::from(json),
        Err(_) => Body::from(body.message.clone()),
    });
    *response.status_mut() = status_of(error);
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::storage::ValidationError;
    use serde_json::json;

    fn body_json(response: &Response<Body>) -> serde_json::Value {
        serde_json::from_slice(response.body().as_ref()).unwrap()
    }

    #[test]
    fn test_store_failure_hides_details() {
        let error = RepositoryError::QueryFailed("AccessDenied for arn:aws:iam::1".to_string());

        let response = error_response("req-1", &error);

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(&response),
            json!({
                "request_id": "req-1",
                "error_type": "Bad Gateway",
                "status_code": 502,
                "message": "a DynamoDB error occurred"
            })
        );
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let error: RepositoryError = ValidationError::MissingField("title").into();

        let response = error_response("req-2", &error);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&response)["message"], "title must be provided");
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_missing_table_name_is_server_error() {
        let error: RepositoryError = ValidationError::MissingTableName.into();

        let response = error_response("req-3", &error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&response)["error_type"], "Internal Server Error");
    }

    #[test]
    fn test_empty_request_id_is_omitted() {
        let error = RepositoryError::InvalidData("Missing or invalid field: title".to_string());

        let json = serde_json::to_value(ErrorBody::from_error("", &error)).unwrap();

        assert!(json.get("request_id").is_none());
        assert_eq!(json["status_code"], 500);
    }
}
