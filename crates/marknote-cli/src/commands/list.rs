use chrono::Utc;
use marknote_core::config::StorageConfig;

use crate::commands::common::{
    format_note_lines, note_to_list_item, open_store, recent_notes, NoteListItem,
};
use crate::error::CliError;

pub fn run_list(limit: usize, as_json: bool, config: &StorageConfig) -> Result<(), CliError> {
    let store = open_store(config)?;
    let notes = recent_notes(store.notes(), limit);
    let now = Utc::now();

    if as_json {
        let json_items = notes
            .iter()
            .map(|note| note_to_list_item(note, now))
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if notes.is_empty() {
        println!("No note is created.");
    } else {
        for line in format_note_lines(notes, now) {
            println!("{line}");
        }
    }

    Ok(())
}
