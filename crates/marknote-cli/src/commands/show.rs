use marknote_core::config::StorageConfig;

use crate::commands::common::{open_store, parse_note_id};
use crate::error::CliError;

pub fn run_show(id: &str, raw: bool, config: &StorageConfig) -> Result<String, CliError> {
    let note_id = parse_note_id(id)?;
    let store = open_store(config)?;
    let note = store
        .get(note_id)
        .ok_or_else(|| CliError::NoteNotFound(note_id.to_string()))?;

    let output = if raw {
        note.content.clone()
    } else {
        note.rendered_content.clone()
    };
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(output)
}
