//! marknote-core - Core library for Marknote
//!
//! This crate contains the note model, the in-memory note store, markdown
//! rendering, and the key-value persistence layer shared by the desktop
//! widget and the CLI.

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod persistence;
pub mod render;
pub mod store;
pub mod util;

pub use error::{Error, RenderError, Result};
pub use models::{Note, NoteId};
pub use persistence::{
    FileKeyValueStore, KeyValueStore, LocalStoragePersistence, MemoryKeyValueStore,
    NotePersistence,
};
pub use render::{ComrakRenderer, MarkdownRenderer};
pub use store::{EditState, NoteStore, SubmitAction};

/// Note store backed by files on disk and rendered with comrak.
pub type FileNoteStore = NoteStore<LocalStoragePersistence<FileKeyValueStore>, ComrakRenderer>;
