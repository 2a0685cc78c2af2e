//! Shared note export helpers for CLI/Desktop parity.

use std::fmt::Write as _;

use serde::Serialize;

use crate::util::escape_html;
use crate::Note;

/// Export output format shared by all clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Html,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

/// Serializable note representation used in JSON and Markdown exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportNote {
    pub id: i64,
    pub content: String,
    pub created_at: Option<String>,
}

/// Convert a note into an export record.
#[must_use]
fn note_to_export_item(note: &Note) -> ExportNote {
    ExportNote {
        id: note.id.value(),
        content: note.content.clone(),
        created_at: note.id.created_at().map(|time| time.to_rfc3339()),
    }
}

/// Render notes as pretty-printed JSON.
pub fn render_json_export(notes: &[Note]) -> serde_json::Result<String> {
    let items = notes
        .iter()
        .map(note_to_export_item)
        .collect::<Vec<ExportNote>>();
    serde_json::to_string_pretty(&items)
}

/// Render notes in Markdown with frontmatter blocks.
#[must_use]
pub fn render_markdown_export(notes: &[Note]) -> String {
    let mut output = String::new();

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let export_note = note_to_export_item(note);
        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", export_note.id);
        if let Some(created_at) = export_note.created_at {
            let _ = writeln!(output, "created_at: {created_at}");
        }
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        output.push_str(&export_note.content);
        output.push('\n');
    }

    output
}

/// Render notes as a standalone HTML page using their stored rendering.
#[must_use]
pub fn render_html_export(notes: &[Note]) -> String {
    let mut output = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Marknote export</title>\n</head>\n<body>\n",
    );

    for note in notes {
        let _ = writeln!(
            output,
            "<article id=\"note-{}\" data-title=\"{}\">",
            note.id,
            escape_html(&note.title_preview(80))
        );
        output.push_str(&note.rendered_content);
        if !note.rendered_content.ends_with('\n') {
            output.push('\n');
        }
        let _ = writeln!(output, "</article>");
    }

    output.push_str("</body>\n</html>\n");
    output
}

/// Render notes based on selected export format.
pub fn render_notes_export(notes: &[Note], format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(notes),
        ExportFormat::Markdown => Ok(render_markdown_export(notes)),
        ExportFormat::Html => Ok(render_html_export(notes)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("marknote-export-{timestamp_ms}.{}", format.extension())
}
