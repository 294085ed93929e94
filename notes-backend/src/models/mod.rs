mod note;

pub use note::{CreateNoteRequest, ListNotesResponse, Note, UpdateNoteRequest};
