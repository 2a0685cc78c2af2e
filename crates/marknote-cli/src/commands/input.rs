//! Collecting markdown for new and edited notes.
//!
//! Content is kept as typed. Only trailing line breaks are dropped, since
//! editors and shells append them and they never change the rendered note.

use std::env;
use std::io::{self, IsTerminal, Read, Write};
use std::process::Command;

use marknote_core::models::is_blank;

use crate::error::CliError;

#[cfg(windows)]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const FALLBACK_EDITOR: &str = "vi";

/// Markdown for `add`: the arguments, then piped stdin, then an editor session.
pub fn resolve_note_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(markdown) = accept_markdown(content_parts.join(" ")) {
        return Ok(markdown);
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        if let Some(markdown) = read_markdown(stdin.lock())? {
            return Ok(markdown);
        }
    }

    edit_markdown("")?.ok_or(CliError::EmptyContent)
}

/// `None` for blank text, otherwise the text without trailing line breaks.
pub fn accept_markdown(text: String) -> Option<String> {
    if is_blank(&text) {
        return None;
    }

    let mut markdown = text;
    let kept = markdown.trim_end_matches(['\n', '\r']).len();
    markdown.truncate(kept);
    Some(markdown)
}

pub fn read_markdown(mut reader: impl Read) -> Result<Option<String>, CliError> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(accept_markdown(buffer))
}

/// Open `initial` in the user's editor and return what was saved.
pub fn edit_markdown(initial: &str) -> Result<Option<String>, CliError> {
    let mut file = tempfile::Builder::new()
        .prefix("marknote-")
        .suffix(".md")
        .tempfile()?;
    file.write_all(initial.as_bytes())?;
    file.flush()?;

    let command = editor_command(env::var("VISUAL").ok(), env::var("EDITOR").ok());
    let (program, args) = split_editor_command(&command)?;

    let status = Command::new(program).args(args).arg(file.path()).status()?;
    if !status.success() {
        return Err(CliError::EditorFailed(format!(
            "`{command}` exited with {status}"
        )));
    }

    let saved = std::fs::read_to_string(file.path())?;
    Ok(accept_markdown(saved))
}

/// `$VISUAL` wins over `$EDITOR`; unset or blank values fall through.
pub fn editor_command(visual: Option<String>, editor: Option<String>) -> String {
    [visual, editor]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Editor commands may carry flags, e.g. `code --wait`.
pub fn split_editor_command(command: &str) -> Result<(&str, Vec<&str>), CliError> {
    let mut words = command.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| CliError::EditorFailed("empty editor command".to_string()))?;
    Ok((program, words.collect()))
}
