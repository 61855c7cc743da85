//! Terminal front end for the note controller.
//!
//! # Responsibility
//! - Map process flags onto logging, storage and controller configuration.
//! - Run the interactive shell over stdin/stdout.

mod render;
mod shell;

use clap::Parser;
use log::info;
use notepad_core::db::{open_db, open_db_in_memory};
use notepad_core::{
    default_log_level, init_logging, CoreConfig, Locale, NoteController, SqliteKvRepository,
    DEFAULT_NOTES_KEY,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "notepad")]
#[command(about = "Keep short text notes in a local store", version)]
struct Cli {
    /// SQLite file holding the notes slot
    #[arg(long, default_value = "notepad.sqlite3")]
    db: PathBuf,
    /// Keep notes in memory for this session only
    #[arg(long)]
    in_memory: bool,
    /// Storage slot holding the note collection
    #[arg(long, default_value = DEFAULT_NOTES_KEY)]
    slot: String,
    /// Display language (en|ar)
    #[arg(long, default_value_t = Locale::En)]
    locale: Locale,
    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Seconds before validation messages are dismissed
    #[arg(long, default_value_t = 3)]
    error_clear_secs: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, log_dir)?;
    }

    let config = CoreConfig::default()
        .with_storage_key(cli.slot.clone())
        .with_locale(cli.locale)
        .with_error_clear_delay(Duration::from_secs(cli.error_clear_secs));

    let conn = if cli.in_memory {
        open_db_in_memory()?
    } else {
        open_db(&cli.db)?
    };
    let repo = config.note_repository(SqliteKvRepository::try_new(conn)?);
    let mut controller = NoteController::new(repo, config)?;
    info!(
        "event=cli_start module=cli status=ok in_memory={} count={}",
        cli.in_memory,
        controller.notes().len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    shell::run(&mut controller, stdin.lock(), &mut stdout)?;

    controller.shutdown();
    Ok(())
}
