mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result, ValidationError, STORE_FAILURE_MESSAGE};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{NoteReader, NoteWriter};

/// Maximum number of notes a single scan returns.
pub const SCAN_LIMIT: i32 = 25;

/// Maximum number of notes a single owner query returns.
pub const QUERY_LIMIT: i32 = 25;
