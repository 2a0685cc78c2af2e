//! Storage configuration shared by the desktop app and the CLI.
//!
//! Values resolve in order: explicit (CLI flag), environment, default.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::persistence::{FileKeyValueStore, LocalStoragePersistence};
use crate::render::ComrakRenderer;
use crate::store::NoteStore;
use crate::util::normalize_text_option;
use crate::FileNoteStore;

/// Storage slot used when nothing else is configured
pub const DEFAULT_STORAGE_KEY: &str = "all-complex-notes";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MARKNOTE_DATA_DIR";

/// Environment variable overriding the storage key
pub const STORAGE_KEY_ENV: &str = "MARKNOTE_STORAGE_KEY";

/// Where notes are persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl StorageConfig {
    /// Resolve from explicit values, then the process environment, then defaults.
    pub fn resolve(explicit_dir: Option<PathBuf>, explicit_key: Option<String>) -> Result<Self> {
        Self::resolve_with(
            explicit_dir,
            explicit_key,
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(STORAGE_KEY_ENV).ok(),
            default_data_dir,
        )
    }

    /// Resolution with the environment passed in.
    pub fn resolve_with(
        explicit_dir: Option<PathBuf>,
        explicit_key: Option<String>,
        env_dir: Option<String>,
        env_key: Option<String>,
        default_dir: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self> {
        let data_dir = match explicit_dir.or_else(|| normalize_text_option(env_dir).map(PathBuf::from))
        {
            Some(dir) => dir,
            None => default_dir().ok_or_else(|| {
                Error::InvalidInput(format!(
                    "could not determine a data directory; set {DATA_DIR_ENV}"
                ))
            })?,
        };

        let storage_key = normalize_text_option(explicit_key)
            .or_else(|| normalize_text_option(env_key))
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        validate_storage_key(&storage_key)?;

        Ok(Self {
            data_dir,
            storage_key,
        })
    }

    /// File the note list is written to
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage_key)
    }

    /// Open a file-backed note store for this configuration
    pub fn open_store(&self) -> Result<FileNoteStore> {
        let persistence = LocalStoragePersistence::new(
            FileKeyValueStore::new(self.data_dir.clone()),
            self.storage_key.clone(),
        )?;
        Ok(NoteStore::open(persistence, ComrakRenderer::default()))
    }
}

/// Platform data directory for marknote, e.g. `~/.local/share/marknote`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("marknote"))
}

/// Keys must be usable as a single file name.
pub fn validate_storage_key(key: &str) -> Result<()> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(
            "storage key must not be empty".to_string(),
        ));
    }
    if trimmed != key
        || key == "."
        || key == ".."
        || key.contains(['/', '\\'])
        || key.chars().any(char::is_control)
    {
        return Err(Error::InvalidInput(format!(
            "storage key '{key}' must be a plain file name"
        )));
    }
    Ok(())
}
