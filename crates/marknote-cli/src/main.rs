//! Marknote CLI - markdown notes from the command line
//!
//! Shares the note store and storage slot with the desktop widget.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};
use marknote_core::config::StorageConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::show::run_show;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = StorageConfig::resolve(cli.data_dir, cli.storage_key)?;
    tracing::debug!("Using note storage at {}", config.storage_path().display());

    match cli.command {
        Some(Commands::Add { content }) => {
            run_add(&content, &config)?;
        }
        Some(Commands::List { limit, json }) => run_list(limit, json, &config)?,
        Some(Commands::Show { id, raw }) => {
            run_show(&id, raw, &config)?;
        }
        Some(Commands::Edit { id }) => run_edit(&id, &config)?,
        Some(Commands::Delete { id }) => run_delete(&id, &config)?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &config)?;
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            // Quick capture mode: marknote "my note"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(&cli.note, &config)?;
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so command output stays pipeable.
fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "marknote=warn".parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
