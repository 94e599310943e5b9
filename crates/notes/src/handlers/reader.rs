use lambda_http::http::{header::CONTENT_TYPE, StatusCode};
use lambda_http::{Body, Error, Request, RequestExt, Response};

use notes_core::note::ListNotesResponse;
use notes_core::storage::{NoteReader, RepositoryError};

use super::error::error_response;
use super::request_id;

/// Lists notes (`GET /notes`, `GET /notes/{owner}`).
///
/// An `owner` path parameter narrows the read to that owner's notes;
/// without it the whole table is scanned. Both reads return one page.
pub async fn read_notes(
    reader: &dyn NoteReader,
    request: Request,
) -> Result<Response<Body>, Error> {
    let request_id = request_id(&request);
    let owner = request
        .path_parameters_ref()
        .and_then(|params| params.first("owner"))
        .map(str::to_string);

    let result = match owner.as_deref() {
        Some(owner) => reader.find_notes_by_owner(owner).await,
        None => reader.scan_notes().await,
    };

    let notes = match result {
        Ok(notes) => notes,
        Err(err) => return Ok(error_response(&request_id, &err)),
    };
    tracing::info!(
        %request_id,
        owner = owner.as_deref().unwrap_or("*"),
        count = notes.len(),
        "Notes read"
    );

    let body = match serde_json::to_string(&ListNotesResponse { notes }) {
        Ok(body) => body,
        Err(err) => {
            let error = RepositoryError::Serialization(err.to_string());
            return Ok(error_response(&request_id, &error));
        }
    };

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::storage::InMemoryRepository;
    use notes_core::note::Note;
    use notes_core::storage::NoteWriter;
    use serde_json::json;

    fn get(owner: Option<&str>) -> Request {
        let request = Request::default();
        match owner {
            Some(owner) => request.with_path_parameters(HashMap::from([(
                "owner".to_string(),
                owner.to_string(),
            )])),
            None => request,
        }
    }

    fn body_json(response: &Response<Body>) -> serde_json::Value {
        serde_json::from_slice(response.body().as_ref()).unwrap()
    }

    fn seeded() -> InMemoryRepository {
        InMemoryRepository::with_notes([
            Note::new("a", "t1", "x").with_timestamp(1700000000),
            Note::new("b", "t2", "y").with_timestamp(1700000001),
        ])
    }

    #[tokio::test]
    async fn test_read_notes_by_owner() {
        let response = read_notes(&seeded(), get(Some("a"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(&response),
            json!({
                "notes": [{
                    "owner": "a",
                    "title": "t1",
                    "message": "x",
                    "timestamp": 1700000000
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_read_notes_without_owner_scans() {
        let response = read_notes(&seeded(), get(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(&response)["notes"].as_array().unwrap().len(), 2);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_read_notes_empty_table() {
        let repo = InMemoryRepository::new();

        let response = read_notes(&repo, get(None)).await.unwrap();

        assert_eq!(body_json(&response), json!({ "notes": [] }));
    }

    #[tokio::test]
    async fn test_read_notes_after_write() {
        let repo = InMemoryRepository::new();
        repo.put_note(&Note::new("c", "t1", "first")).await.unwrap();
        repo.put_note(&Note::new("c", "t1", "second")).await.unwrap();

        let response = read_notes(&repo, get(Some("c"))).await.unwrap();

        let notes = &body_json(&response)["notes"];
        assert_eq!(notes.as_array().unwrap().len(), 1);
        assert_eq!(notes[0]["message"], "second");
    }

    #[tokio::test]
    async fn test_read_notes_empty_owner_is_bad_request() {
        let response = read_notes(&seeded(), get(Some(""))).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&response)["message"], "owner must be provided");
    }
}
