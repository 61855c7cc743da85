//! Core domain logic for Notepad.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{CoreConfig, DEFAULT_ERROR_CLEAR_DELAY};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::note::{Note, NoteDraft, NoteId, ValidationIssue};
pub use repo::kv_repo::{
    KvRepository, MemoryKvRepository, RepoError, RepoResult, SqliteKvRepository,
};
pub use repo::note_repo::{KvNoteRepository, NoteRepository, DEFAULT_NOTES_KEY};
pub use service::clock::{Clock, ManualClock, SystemClock};
pub use service::error_clear::ErrorClearTask;
pub use service::note_controller::{ControllerError, ControllerResult, NoteController};
pub use view::messages::{Locale, Messages};
pub use view::{FormAction, NoteForm, NoteListItem, NoteView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
