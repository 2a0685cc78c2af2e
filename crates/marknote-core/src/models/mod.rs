//! Data models for Marknote

mod note;

pub use note::{is_blank, Note, NoteId};
