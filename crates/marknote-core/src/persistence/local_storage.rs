//! JSON note list stored under a single key

use crate::config::{validate_storage_key, DEFAULT_STORAGE_KEY};
use crate::error::Result;
use crate::models::Note;

use super::{KeyValueStore, NotePersistence};

/// Persists the whole note list as one JSON array under a fixed key.
#[derive(Debug, Clone)]
pub struct LocalStoragePersistence<K> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> LocalStoragePersistence<K> {
    /// Use `key` as the storage slot
    pub fn new(store: K, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_storage_key(&key)?;
        Ok(Self { store, key })
    }

    /// Use the default `all-complex-notes` slot
    pub fn with_default_key(store: K) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl<K: KeyValueStore> NotePersistence for LocalStoragePersistence<K> {
    fn load(&self) -> Vec<Note> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No persisted notes under '{}'", self.key);
                return Vec::new();
            }
            Err(error) => {
                tracing::warn!("Failed to read notes under '{}': {}", self.key, error);
                return Vec::new();
            }
        };

        match decode_notes(&raw) {
            Ok(notes) => {
                tracing::info!("Loaded {} notes from '{}'", notes.len(), self.key);
                notes
            }
            Err(error) => {
                tracing::warn!(
                    "Persisted notes under '{}' are unreadable, starting empty: {}",
                    self.key,
                    error
                );
                Vec::new()
            }
        }
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let serialized = encode_notes(notes)?;
        self.store.set_item(&self.key, &serialized)?;
        tracing::debug!("Saved {} notes to '{}'", notes.len(), self.key);
        Ok(())
    }
}

/// Serialize a note list to the storage blob format
pub fn encode_notes(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parse a storage blob
pub fn decode_notes(raw: &str) -> Result<Vec<Note>> {
    Ok(serde_json::from_str(raw)?)
}
