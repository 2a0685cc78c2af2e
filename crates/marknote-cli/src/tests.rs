use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use marknote_core::config::{StorageConfig, DEFAULT_STORAGE_KEY};
use chrono::{DateTime, Duration, TimeZone, Utc};
use marknote_core::{Note, NoteId};
use pretty_assertions::assert_eq;

use crate::cli::{CompletionShell, ExportFormat};
use crate::commands::add::run_add;
use crate::commands::common::{
    format_note_lines, format_relative_time, note_to_list_item, parse_note_id, recent_notes,
};
use crate::commands::completions::{completion_script, run_completions};
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit_with;
use crate::commands::export::run_export;
use crate::commands::input::{
    accept_markdown, editor_command, read_markdown, split_editor_command,
};
use crate::commands::show::run_show;
use crate::error::CliError;

#[test]
fn accept_markdown_rejects_blank_text() {
    assert_eq!(accept_markdown(" \n\t ".to_string()), None);
    assert_eq!(accept_markdown(String::new()), None);
}

#[test]
fn accept_markdown_keeps_leading_indentation() {
    assert_eq!(
        accept_markdown("    let x = 1;\n".to_string()),
        Some("    let x = 1;".to_string())
    );
    assert_eq!(
        accept_markdown("# Title\n\n- item  \r\n\n".to_string()),
        Some("# Title\n\n- item  ".to_string())
    );
}

#[test]
fn read_markdown_takes_piped_text_as_written() {
    let piped = read_markdown("  > quoted\n".as_bytes()).unwrap();
    assert_eq!(piped, Some("  > quoted".to_string()));
    assert_eq!(read_markdown("\n\n".as_bytes()).unwrap(), None);
}

#[test]
fn editor_command_prefers_visual_then_editor() {
    assert_eq!(
        editor_command(Some("code --wait".to_string()), Some("nano".to_string())),
        "code --wait"
    );
    assert_eq!(
        editor_command(Some("  ".to_string()), Some("nano".to_string())),
        "nano"
    );
    assert!(!editor_command(None, None).is_empty());
}

#[test]
fn split_editor_command_separates_flags() {
    let (program, args) = split_editor_command("code --wait -n").unwrap();
    assert_eq!(program, "code");
    assert_eq!(args, vec!["--wait", "-n"]);
    assert!(matches!(
        split_editor_command("   "),
        Err(CliError::EditorFailed(_))
    ));
}

#[test]
fn format_relative_time_units() {
    let now = fixed_now();
    assert_eq!(format_relative_time(now - Duration::seconds(30), now), "just now");
    assert_eq!(format_relative_time(now - Duration::minutes(2), now), "2m ago");
    assert_eq!(format_relative_time(now - Duration::hours(2), now), "2h ago");
    assert_eq!(format_relative_time(now - Duration::days(3), now), "3d ago");
    assert_eq!(
        format_relative_time(Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap(), now),
        "2024-01-02"
    );
}

#[test]
fn parse_note_id_validates_input() {
    assert_eq!(parse_note_id(" 42 ").unwrap(), NoteId::new(42));
    assert!(matches!(parse_note_id("  "), Err(CliError::EmptyNoteId)));
    assert!(matches!(
        parse_note_id("abc"),
        Err(CliError::InvalidNoteId(value)) if value == "abc"
    ));
}

#[test]
fn recent_notes_keeps_the_tail_in_order() {
    let notes = (1..=5)
        .map(|index| Note::new(NoteId::new(index), format!("note {index}"), ""))
        .collect::<Vec<_>>();

    let recent = recent_notes(&notes, 2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, NoteId::new(4));
    assert_eq!(recent[1].id, NoteId::new(5));
    assert_eq!(recent_notes(&notes, 50).len(), 5);
}

#[test]
fn format_note_lines_show_id_and_preview() {
    let note = Note::new(NoteId::new(1_700_000_000_000), "## Groceries\n- milk", "");
    let now = note.id.created_at().unwrap() + Duration::hours(5);
    let lines = format_note_lines(&[note], now);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1700000000000  Groceries"));
    assert!(lines[0].ends_with("5h ago"));
}

#[test]
fn note_to_list_item_includes_plain_preview() {
    let note = Note::new(NoteId::new(1_700_000_000_000), "**bold** start", "");
    let item = note_to_list_item(&note, fixed_now());

    assert_eq!(item.id, 1_700_000_000_000);
    assert_eq!(item.preview, "bold start");
    assert_eq!(item.content, "**bold** start");
    assert_eq!(
        item.created_at.as_deref(),
        Some("2023-11-14T22:13:20+00:00")
    );
    assert_eq!(item.relative_time, "2023-11-14");
}

#[test]
fn run_add_persists_notes_in_order() {
    let config = unique_test_config();

    let first = run_add(&["#".to_string(), "Hi".to_string()], &config).unwrap();
    let second = run_add(&["second".to_string()], &config).unwrap();

    let store = config.open_store().unwrap();
    let notes = store.notes();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, first);
    assert_eq!(notes[0].content, "# Hi");
    assert!(notes[0].rendered_content.contains("<h1>Hi</h1>"));
    assert_eq!(notes[1].id, second);

    cleanup_test_dir(&config);
}

#[test]
fn run_add_stores_markdown_verbatim() {
    let config = unique_test_config();

    let id = run_add(&["    let x = 1;".to_string()], &config).unwrap();

    let store = config.open_store().unwrap();
    let note = store.get(id).unwrap();
    assert_eq!(note.content, "    let x = 1;");
    assert!(note.rendered_content.contains("<pre><code>let x = 1;"));

    cleanup_test_dir(&config);
}

#[test]
fn run_edit_keeps_indented_code_from_editor() {
    let config = unique_test_config();
    let id = run_add(&["intro".to_string()], &config).unwrap();

    run_edit_with(&id.to_string(), &config, |initial| {
        Ok(accept_markdown(format!("{initial}\n\n    fn main() {{}}\n")))
    })
    .unwrap();

    let store = config.open_store().unwrap();
    let note = store.get(id).unwrap();
    assert_eq!(note.content, "intro\n\n    fn main() {}");
    assert!(note.rendered_content.contains("<pre><code>fn main() {}"));

    cleanup_test_dir(&config);
}

#[test]
fn run_edit_with_unchanged_content_does_not_rewrite() {
    let config = unique_test_config();
    let id = run_add(&["same".to_string()], &config).unwrap();
    let before = std::fs::read_to_string(config.storage_path()).unwrap();

    run_edit_with(&id.to_string(), &config, |initial| {
        Ok(accept_markdown(format!("{initial}\n")))
    })
    .unwrap();

    assert_eq!(std::fs::read_to_string(config.storage_path()).unwrap(), before);

    cleanup_test_dir(&config);
}

#[test]
fn run_delete_removes_note_and_rejects_unknown_ids() {
    let config = unique_test_config();
    let first = run_add(&["first".to_string()], &config).unwrap();
    run_add(&["second".to_string()], &config).unwrap();

    run_delete(&first.to_string(), &config).unwrap();

    let store = config.open_store().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].content, "second");

    let error = run_delete(&first.to_string(), &config).unwrap_err();
    assert!(matches!(error, CliError::NoteNotFound(_)));

    cleanup_test_dir(&config);
}

#[test]
fn run_edit_updates_content_in_place() {
    let config = unique_test_config();
    let first = run_add(&["one".to_string()], &config).unwrap();
    let second = run_add(&["two".to_string()], &config).unwrap();

    run_edit_with(&second.to_string(), &config, |initial| {
        assert_eq!(initial, "two");
        Ok(Some("*two*, revised".to_string()))
    })
    .unwrap();

    let store = config.open_store().unwrap();
    assert_eq!(store.notes()[0].id, first);
    assert_eq!(store.notes()[0].content, "one");
    assert_eq!(store.notes()[1].id, second);
    assert_eq!(store.notes()[1].content, "*two*, revised");
    assert!(store.notes()[1]
        .rendered_content
        .contains("<em>two</em>, revised"));

    cleanup_test_dir(&config);
}

#[test]
fn run_edit_rejects_empty_result() {
    let config = unique_test_config();
    let id = run_add(&["keep".to_string()], &config).unwrap();

    let error = run_edit_with(&id.to_string(), &config, |_| Ok(None)).unwrap_err();
    assert!(matches!(error, CliError::EmptyEditedContent));

    let store = config.open_store().unwrap();
    assert_eq!(store.get(id).unwrap().content, "keep");

    cleanup_test_dir(&config);
}

#[test]
fn run_edit_unknown_note_is_not_found() {
    let config = unique_test_config();

    let error = run_edit_with("123", &config, |_| Ok(Some("x".to_string()))).unwrap_err();
    assert!(matches!(error, CliError::NoteNotFound(_)));
}

#[test]
fn run_show_prints_html_or_raw_markdown() {
    let config = unique_test_config();
    let id = run_add(&["#".to_string(), "Title".to_string()], &config).unwrap();

    let html = run_show(&id.to_string(), false, &config).unwrap();
    assert_eq!(html.trim(), "<h1>Title</h1>");

    let raw = run_show(&id.to_string(), true, &config).unwrap();
    assert_eq!(raw, "# Title");

    cleanup_test_dir(&config);
}

#[test]
fn list_on_empty_storage_does_not_fail() {
    let config = unique_test_config();
    crate::commands::list::run_list(10, false, &config).unwrap();
    crate::commands::list::run_list(10, true, &config).unwrap();
}

#[test]
fn corrupted_storage_is_treated_as_empty() {
    let config = unique_test_config();
    std::fs::create_dir_all(&config.data_dir).unwrap();
    std::fs::write(config.storage_path(), "{ definitely not notes").unwrap();

    let id = run_add(&["fresh".to_string()], &config).unwrap();

    let store = config.open_store().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].id, id);

    cleanup_test_dir(&config);
}

#[test]
fn run_export_writes_json_file() {
    let config = unique_test_config();
    run_add(&["Export me".to_string()], &config).unwrap();

    let output_path = config.data_dir.join("export.json");
    run_export(ExportFormat::Json, Some(&output_path), &config).unwrap();

    let exported = std::fs::read_to_string(&output_path).unwrap();
    assert!(exported.contains("\"content\": \"Export me\""));

    cleanup_test_dir(&config);
}

#[test]
fn run_export_writes_html_file() {
    let config = unique_test_config();
    run_add(&["**loud**".to_string()], &config).unwrap();

    let output_path = config.data_dir.join("export.html");
    run_export(ExportFormat::Html, Some(&output_path), &config).unwrap();

    let exported = std::fs::read_to_string(&output_path).unwrap();
    assert!(exported.contains("<strong>loud</strong>"));

    cleanup_test_dir(&config);
}

#[test]
fn run_export_into_directory_uses_suggested_name() {
    let config = unique_test_config();
    run_add(&["- [ ] task".to_string()], &config).unwrap();

    let written = run_export(ExportFormat::Markdown, Some(&config.data_dir), &config)
        .unwrap()
        .unwrap();

    assert_eq!(written.parent(), Some(config.data_dir.as_path()));
    let name = written.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("marknote-export-"));
    assert!(name.ends_with(".md"));
    assert!(std::fs::read_to_string(&written).unwrap().contains("- [ ] task"));

    cleanup_test_dir(&config);
}

#[test]
fn run_completions_writes_bash_script_file() {
    let output_path = std::env::temp_dir().join(format!(
        "marknote-completions-test-{}.bash",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_nanos())
    ));

    run_completions(CompletionShell::Bash, Some(&output_path)).unwrap();

    let script = std::fs::read_to_string(&output_path).unwrap();
    assert!(script.contains("_marknote()"));
    assert!(script.contains("complete -F _marknote"));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn completion_scripts_mention_subcommands() {
    let fish = String::from_utf8(completion_script(CompletionShell::Fish)).unwrap();
    assert!(fish.contains("marknote"));
    assert!(fish.contains("delete"));
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn unique_test_config() -> StorageConfig {
    static NEXT_TEST_DIR_ID: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    let sequence = NEXT_TEST_DIR_ID.fetch_add(1, Ordering::Relaxed);
    let data_dir: PathBuf =
        std::env::temp_dir().join(format!("marknote-cli-test-{timestamp}-{sequence}"));

    StorageConfig {
        data_dir,
        storage_key: DEFAULT_STORAGE_KEY.to_string(),
    }
}

fn cleanup_test_dir(config: &StorageConfig) {
    let _ = std::fs::remove_dir_all(&config.data_dir);
}
