use marknote_core::config::StorageConfig;

use crate::commands::common::{ensure_saved, open_store, parse_note_id};
use crate::commands::input::{accept_markdown, edit_markdown};
use crate::error::CliError;

pub fn run_edit(id: &str, config: &StorageConfig) -> Result<(), CliError> {
    run_edit_with(id, config, edit_markdown)
}

/// Edit flow with the editor step injected.
pub fn run_edit_with(
    id: &str,
    config: &StorageConfig,
    edit: impl FnOnce(&str) -> Result<Option<String>, CliError>,
) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let mut store = open_store(config)?;

    let Some(original) = store.begin_edit(note_id).map(str::to_string) else {
        return Err(CliError::NoteNotFound(note_id.to_string()));
    };

    let Some(edited_content) = edit(&original)? else {
        store.cancel_edit();
        return Err(CliError::EmptyEditedContent);
    };

    if accept_markdown(original).as_deref() == Some(edited_content.as_str()) {
        store.cancel_edit();
        println!("{note_id}");
        return Ok(());
    }

    store.set_draft(edited_content);
    let updated = store.submit().ok_or(CliError::EmptyEditedContent)?;
    ensure_saved(&store)?;

    println!("{updated}");
    Ok(())
}
