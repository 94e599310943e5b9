mod requests;
mod types;

pub use requests::CreateNote;
pub use types::{ListNotesResponse, Note};
