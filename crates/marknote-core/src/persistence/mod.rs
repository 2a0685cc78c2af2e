//! Persistence layer for the note list

mod key_value;
mod local_storage;

pub use key_value::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use local_storage::{decode_notes, encode_notes, LocalStoragePersistence};

use crate::error::Result;
use crate::models::Note;

/// Durable storage for the full note list
pub trait NotePersistence {
    /// Load the persisted list. Missing or unreadable data yields an empty list.
    fn load(&self) -> Vec<Note>;

    /// Replace the persisted list with `notes`
    fn save(&self, notes: &[Note]) -> Result<()>;
}

impl<P: NotePersistence + ?Sized> NotePersistence for Box<P> {
    fn load(&self) -> Vec<Note> {
        (**self).load()
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        (**self).save(notes)
    }
}
