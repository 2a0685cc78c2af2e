use chrono::{DateTime, Utc};
use marknote_core::config::StorageConfig;
use marknote_core::{FileNoteStore, Note, NoteId};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: i64,
    pub preview: String,
    pub content: String,
    pub created_at: Option<String>,
    pub relative_time: String,
}

pub fn open_store(config: &StorageConfig) -> Result<FileNoteStore, CliError> {
    Ok(config.open_store()?)
}

/// Turn a swallowed write failure into a command error.
pub fn ensure_saved(store: &FileNoteStore) -> Result<(), CliError> {
    match store.last_save_error() {
        Some(message) => Err(CliError::SaveFailed(message.to_string())),
        None => Ok(()),
    }
}

pub fn parse_note_id(id: &str) -> Result<NoteId, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyNoteId);
    }
    trimmed
        .parse::<NoteId>()
        .map_err(|_| CliError::InvalidNoteId(trimmed.to_string()))
}

/// The `limit` most recent notes, keeping display order.
pub fn recent_notes(notes: &[Note], limit: usize) -> &[Note] {
    let start = notes.len().saturating_sub(limit);
    &notes[start..]
}

pub fn format_note_lines(notes: &[Note], now: DateTime<Utc>) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let id = note.id.to_string();
            let preview = note.title_preview(40);
            let age = note_age(note, now);
            format!("{id:<13}  {preview:<40}  {age}")
        })
        .collect()
}

pub fn note_to_list_item(note: &Note, now: DateTime<Utc>) -> NoteListItem {
    NoteListItem {
        id: note.id.value(),
        preview: note.title_preview(80),
        content: note.content.clone(),
        created_at: note.id.created_at().map(|time| time.to_rfc3339()),
        relative_time: note_age(note, now),
    }
}

fn note_age(note: &Note, now: DateTime<Utc>) -> String {
    note.id
        .created_at()
        .map_or_else(|| "-".to_string(), |created| format_relative_time(created, now))
}

/// Age of a note, coarse enough for a listing column.
pub fn format_relative_time(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(created);

    match (age.num_minutes(), age.num_hours(), age.num_days()) {
        (minutes, _, _) if minutes < 1 => "just now".to_string(),
        (minutes, hours, _) if hours < 1 => format!("{minutes}m ago"),
        (_, hours, days) if days < 1 => format!("{hours}h ago"),
        (_, _, days) if days < 30 => format!("{days}d ago"),
        _ => created.format("%Y-%m-%d").to_string(),
    }
}
