use lambda_http::http::{header::LOCATION, StatusCode};
use lambda_http::{Body, Error, Request, Response};

use notes_core::note::CreateNote;
use notes_core::storage::{NoteWriter, RepositoryError, ValidationError};

use super::error::error_response;
use super::request_id;

/// Writes the note in the request body (`POST /notes`).
///
/// Responds `201 Created` with `Location: /<owner>` and an empty body.
pub async fn write_note(
    writer: &dyn NoteWriter,
    request: Request,
) -> Result<Response<Body>, Error> {
    let request_id = request_id(&request);

    let create: CreateNote = match serde_json::from_slice(request.body().as_ref()) {
        Ok(create) => create,
        Err(err) => {
            let error = RepositoryError::from(ValidationError::Malformed(err.to_string()));
            return Ok(error_response(&request_id, &error));
        }
    };
    if let Err(err) = create.validate() {
        return Ok(error_response(&request_id, &err.into()));
    }

    let note = create.into_note();
    match writer.put_note(&note).await {
        Ok(owner) => {
            tracing::info!(%request_id, owner = %owner, title = %note.title, "Note written");
            Ok(Response::builder()
                .status(StatusCode::CREATED)
                .header(LOCATION, format!("/{}", owner))
                .body(Body::Empty)?)
        }
        Err(err) => Ok(error_response(&request_id, &err)),
    }
}
