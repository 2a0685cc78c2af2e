//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use marknote_core::config::StorageConfig;
use marknote_core::{
    ComrakRenderer, FileKeyValueStore, LocalStoragePersistence, MemoryKeyValueStore, NoteId,
    NotePersistence, NoteStore, SubmitAction,
};

use crate::theme::ResolvedTheme;

/// Note store used by the desktop widget
pub type DesktopStore = NoteStore<Box<dyn NotePersistence>, ComrakRenderer>;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Notes, draft text and editing pointer
    pub store: Signal<DesktopStore>,
    /// Why notes are only kept in memory, if storage could not be configured
    pub storage_warning: Signal<Option<String>>,
    /// Theme resolved at startup
    pub theme: ResolvedTheme,
}

impl AppState {
    pub fn set_draft(&mut self, text: String) {
        self.store.write().set_draft(text);
    }

    pub fn submit(&mut self) {
        let mut store = self.store.write();
        let verb = match store.submit_action() {
            SubmitAction::Create => "Created",
            SubmitAction::Update => "Updated",
        };
        match store.submit() {
            Some(id) => tracing::info!("{} note {}", verb, id),
            None => tracing::debug!("Ignored empty submission"),
        }
    }

    pub fn begin_edit(&mut self, id: NoteId) {
        if self.store.write().begin_edit(id).is_none() {
            tracing::warn!("Tried to edit missing note {}", id);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.store.write().cancel_edit();
    }

    pub fn delete(&mut self, id: NoteId) {
        if self.store.write().delete(id) {
            tracing::info!("Deleted note {}", id);
        }
    }
}

/// Open the file-backed store for `config`, or an in-memory one without it.
pub fn open_desktop_store(config: Option<&StorageConfig>) -> DesktopStore {
    let persistence: Box<dyn NotePersistence> = match config {
        Some(config) => match LocalStoragePersistence::new(
            FileKeyValueStore::new(config.data_dir.clone()),
            config.storage_key.clone(),
        ) {
            Ok(persistence) => {
                tracing::info!("Storing notes at {}", config.storage_path().display());
                Box::new(persistence)
            }
            Err(error) => {
                tracing::error!("Invalid storage configuration: {}", error);
                Box::new(LocalStoragePersistence::with_default_key(
                    MemoryKeyValueStore::new(),
                ))
            }
        },
        None => Box::new(LocalStoragePersistence::with_default_key(
            MemoryKeyValueStore::new(),
        )),
    };

    NoteStore::open(persistence, ComrakRenderer::default())
}
