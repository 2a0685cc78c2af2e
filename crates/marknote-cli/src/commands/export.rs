use std::path::{Path, PathBuf};

use marknote_core::config::StorageConfig;
use marknote_core::export::{render_notes_export, suggested_export_file_name};
use marknote_core::util::unix_timestamp_millis_now;

use crate::cli::ExportFormat;
use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    config: &StorageConfig,
) -> Result<Option<PathBuf>, CliError> {
    let store = open_store(config)?;
    let format = format.into();
    let rendered = render_notes_export(store.notes(), format)?;

    let Some(path) = output_path else {
        println!("{rendered}");
        return Ok(None);
    };

    // A directory target gets a timestamped file name
    let path = if path.is_dir() {
        path.join(suggested_export_file_name(
            format,
            unix_timestamp_millis_now(),
        ))
    } else {
        path.to_path_buf()
    };
    std::fs::write(&path, rendered)?;
    println!("{}", path.display());

    Ok(Some(path))
}
