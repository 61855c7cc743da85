//! Note state controller.
//!
//! # Responsibility
//! - Own the note collection plus selection, mode flags and drafts.
//! - Validate drafts and persist the full collection on every mutation.
//! - Schedule dismissal of validation messages.
//!
//! # Invariants
//! - Note ids are unique within the collection and never reassigned.
//! - Every mutation persists first and commits to memory second; a failed
//!   write leaves the controller exactly as it was.
//! - A validation failure changes nothing but the validation message list.
//! - Setting a non-empty message list reschedules the auto-clear; setting an
//!   empty one cancels it.

use crate::config::CoreConfig;
use crate::model::note::{Note, NoteDraft, NoteId, ValidationIssue};
use crate::repo::kv_repo::RepoError;
use crate::repo::note_repo::NoteRepository;
use crate::service::clock::{Clock, SystemClock};
use crate::service::error_clear::ErrorClearTask;
use crate::view::messages::Messages;
use crate::view::{derive_view, list_items, NoteListItem, NoteView, ViewState};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Error returned by controller handlers.
#[derive(Debug)]
pub enum ControllerError {
    /// Draft is missing required fields; messages were published.
    Validation(Vec<ValidationIssue>),
    /// Target note does not exist in the collection.
    NoteNotFound(NoteId),
    /// `save_edit` was called with nothing selected.
    NoSelection,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(issues) => {
                let joined = issues
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation failed: {joined}")
            }
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::NoSelection => write!(f, "no note is selected"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Owned application state behind the note UI.
pub struct NoteController<R: NoteRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
    config: CoreConfig,
    notes: Vec<Note>,
    selected: Option<NoteId>,
    creating: bool,
    editing: bool,
    draft: NoteDraft,
    validation_errors: Vec<String>,
    error_clear: ErrorClearTask,
}

impl<R: NoteRepository> NoteController<R, SystemClock> {
    /// Initializes a controller driven by the system clock.
    pub fn new(repo: R, config: CoreConfig) -> ControllerResult<Self> {
        Self::init(repo, SystemClock, config)
    }
}

impl<R: NoteRepository, C: Clock> NoteController<R, C> {
    /// Loads the persisted collection, creating an empty slot on first run.
    ///
    /// # Errors
    /// - `Repo` when the slot cannot be read, is malformed, or the initial
    ///   empty collection cannot be written.
    pub fn init(mut repo: R, clock: C, config: CoreConfig) -> ControllerResult<Self> {
        let notes = match repo.load_notes()? {
            Some(notes) => notes,
            None => {
                repo.save_notes(&[])?;
                info!(
                    "event=slot_init module=service status=ok key={}",
                    config.storage_key
                );
                Vec::new()
            }
        };

        info!(
            "event=controller_init module=service status=ok count={} locale={}",
            notes.len(),
            config.locale
        );

        Ok(Self {
            repo,
            clock,
            config,
            notes,
            selected: None,
            creating: false,
            editing: false,
            draft: NoteDraft::default(),
            validation_errors: Vec::new(),
            error_clear: ErrorClearTask::new(),
        })
    }

    /// Cancels pending work and hands the repository back to the caller.
    pub fn shutdown(mut self) -> R {
        let canceled = self.error_clear.cancel();
        info!(
            "event=controller_shutdown module=service status=ok count={} canceled_clear={}",
            self.notes.len(),
            canceled
        );
        self.repo
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    /// Messages of the latest failed validation, until auto-cleared.
    pub fn validation_errors(&self) -> &[String] {
        &self.validation_errors
    }

    /// Deadline of the pending message auto-clear, if any.
    ///
    /// `None` also when the configured delay puts the deadline out of range.
    pub fn pending_error_clear(&self) -> Option<Instant> {
        self.error_clear.due_at()
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn messages(&self) -> &'static Messages {
        self.config.locale.messages()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Mutable access to the repository. Writes made through it bypass the
    /// controller and are not reflected in memory until the next `init`.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Checks the drafts and publishes one message per missing field.
    ///
    /// Returns `true` and clears the messages when both fields are present.
    pub fn validate(&mut self) -> bool {
        self.check_draft().is_ok()
    }

    /// Fires the message auto-clear when due. Returns whether it fired.
    pub fn tick(&mut self) -> bool {
        if !self.error_clear.fire_if_due(self.clock.now()) {
            return false;
        }
        debug!(
            "event=validation_clear module=service status=ok cleared={}",
            self.validation_errors.len()
        );
        self.validation_errors.clear();
        true
    }

    /// Enters create mode with empty drafts.
    pub fn start_create(&mut self) {
        self.creating = true;
        self.editing = false;
        self.draft.clear();
        debug!("event=mode_change module=service status=ok mode=create");
    }

    /// Selects a note and leaves create/edit modes.
    ///
    /// The id is not checked against the collection; a dangling selection
    /// renders as the select placeholder.
    pub fn select(&mut self, id: NoteId) {
        self.selected = Some(id);
        self.creating = false;
        self.editing = false;
        debug!("event=note_select module=service status=ok note_id={id}");
    }

    /// Appends a note built from the drafts and selects it.
    ///
    /// # Errors
    /// - `Validation` when a draft field is empty.
    /// - `Repo` when the collection cannot be persisted.
    pub fn save_new(&mut self) -> ControllerResult<NoteId> {
        self.check_draft()?;

        let notes = &self.notes;
        let id = NoteId::generate_unique(|candidate| notes.iter().any(|note| note.id == candidate));
        let mut next = self.notes.clone();
        next.push(Note::from_draft(id, &self.draft));
        self.persist("note_create", next)?;

        self.draft.clear();
        self.creating = false;
        self.selected = Some(id);
        info!(
            "event=note_create module=service status=ok note_id={id} count={}",
            self.notes.len()
        );
        Ok(id)
    }

    /// Removes the note with `id` and clears the selection.
    ///
    /// Returns whether a note was removed. The selection is cleared even when
    /// `id` is absent or was not the selected note.
    pub fn delete(&mut self, id: NoteId) -> ControllerResult<bool> {
        let mut next = self.notes.clone();
        let removed = match next.iter().position(|note| note.id == id) {
            Some(index) => {
                next.remove(index);
                true
            }
            None => false,
        };
        self.persist("note_delete", next)?;

        self.selected = None;
        info!(
            "event=note_delete module=service status=ok note_id={id} removed={removed} count={}",
            self.notes.len()
        );
        Ok(removed)
    }

    /// Selects the note and enters edit mode with drafts seeded from it.
    ///
    /// Leaves create mode, so the next submit can only target this note.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` is not in the collection; nothing changes.
    pub fn enter_edit(&mut self, id: NoteId) -> ControllerResult<()> {
        let Some(note) = self.notes.iter().find(|note| note.id == id) else {
            warn!("event=mode_change module=service status=error mode=edit note_id={id} error_code=not_found");
            return Err(ControllerError::NoteNotFound(id));
        };

        self.draft = NoteDraft::from_note(note);
        self.selected = Some(id);
        self.creating = false;
        self.editing = true;
        debug!("event=mode_change module=service status=ok mode=edit note_id={id}");
        Ok(())
    }

    /// Replaces the selected note's title/content with the drafts.
    ///
    /// The selection is kept.
    ///
    /// # Errors
    /// - `Validation` when a draft field is empty.
    /// - `NoSelection` / `NoteNotFound` when there is no note to replace.
    /// - `Repo` when the collection cannot be persisted.
    pub fn save_edit(&mut self) -> ControllerResult<()> {
        self.check_draft()?;

        let id = self.selected.ok_or(ControllerError::NoSelection)?;
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(ControllerError::NoteNotFound(id))?;
        let mut next = self.notes.clone();
        next[index] = Note::from_draft(id, &self.draft);
        self.persist("note_update", next)?;

        self.editing = false;
        self.draft.clear();
        info!("event=note_update module=service status=ok note_id={id}");
        Ok(())
    }

    /// Derives the detail/edit pane content from current state.
    pub fn view(&self) -> NoteView {
        let state = ViewState {
            notes: &self.notes,
            selected: self.selected,
            creating: self.creating,
            editing: self.editing,
            draft: &self.draft,
        };
        derive_view(&state, self.messages())
    }

    /// Rows of the list pane in collection order.
    pub fn list_items(&self) -> Vec<NoteListItem> {
        list_items(&self.notes, self.selected)
    }

    fn check_draft(&mut self) -> ControllerResult<()> {
        match self.draft.validate() {
            Ok(()) => {
                self.set_validation_errors(Vec::new());
                Ok(())
            }
            Err(issues) => {
                let messages = self.messages();
                let errors = issues
                    .iter()
                    .map(|issue| messages.validation(*issue).to_string())
                    .collect();
                self.set_validation_errors(errors);
                warn!(
                    "event=draft_validate module=service status=error issues={}",
                    issues.len()
                );
                Err(ControllerError::Validation(issues))
            }
        }
    }

    fn set_validation_errors(&mut self, errors: Vec<String>) {
        self.validation_errors = errors;
        if self.validation_errors.is_empty() {
            self.error_clear.cancel();
        } else {
            self.error_clear
                .schedule(self.clock.now(), self.config.error_clear_delay);
        }
    }

    fn persist(&mut self, event: &'static str, next: Vec<Note>) -> ControllerResult<()> {
        if let Err(err) = self.repo.save_notes(&next) {
            error!(
                "event={event} module=service status=error error_code=persist_failed error={err}"
            );
            return Err(err.into());
        }
        self.notes = next;
        Ok(())
    }
}
