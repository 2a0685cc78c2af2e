//! UI Components
//!
//! Reusable UI components for the desktop application.

mod header;
mod note_card;
mod note_editor;
mod note_list;

pub use header::Header;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
