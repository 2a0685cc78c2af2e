use marknote_core::config::StorageConfig;

use crate::commands::common::{ensure_saved, open_store, parse_note_id};
use crate::error::CliError;

pub fn run_delete(id: &str, config: &StorageConfig) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let mut store = open_store(config)?;

    if !store.delete(note_id) {
        return Err(CliError::NoteNotFound(note_id.to_string()));
    }
    ensure_saved(&store)?;

    println!("{note_id}");
    Ok(())
}
