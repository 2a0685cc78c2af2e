use marknote_core::config::StorageConfig;
use marknote_core::NoteId;

use crate::commands::common::{ensure_saved, open_store};
use crate::commands::input::resolve_note_content;
use crate::error::CliError;

pub fn run_add(content_parts: &[String], config: &StorageConfig) -> Result<NoteId, CliError> {
    let content = resolve_note_content(content_parts)?;

    let mut store = open_store(config)?;
    let id = store.create(&content).ok_or(CliError::EmptyContent)?;
    ensure_saved(&store)?;

    println!("{id}");
    Ok(id)
}
