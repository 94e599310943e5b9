//! Lambda handlers.
//!
//! Each handler takes its repository or client as a trait object so the
//! binaries can pass the DynamoDB implementation and tests the in-memory one.

pub mod deploy_hook;
pub mod error;
pub mod reader;
pub mod writer;

pub use deploy_hook::{handle_deployment_hook, HookError, LifecycleHookApi};
pub use error::{error_response, ErrorBody};
pub use reader::read_notes;
pub use writer::write_note;

use lambda_http::{Request, RequestExt};

/// Request id of the current invocation, empty outside Lambda.
pub(crate) fn request_id(request: &Request) -> String {
    request
        .lambda_context_ref()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_default()
}
