//! Derived view model for front ends.
//!
//! # Responsibility
//! - Decide which pane content to show from controller state.
//! - Provide list-pane rows and localized strings.
//!
//! # Invariants
//! - View derivation is pure; it never mutates controller state.
//! - Precedence: create form, empty placeholder, select placeholder, edit
//!   form, detail.

pub mod messages;

use crate::model::note::{Note, NoteDraft, NoteId};
use messages::Messages;

/// Which submit handler a rendered form is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    SaveNew,
    SaveEdit,
}

/// Form pane content seeded from the current drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteForm {
    pub form_title: &'static str,
    pub title: String,
    pub content: String,
    pub submit_label: &'static str,
    pub action: FormAction,
}

/// Content of the detail/edit pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteView {
    CreateForm(NoteForm),
    /// The collection is empty. Not an error.
    Empty { message: &'static str },
    /// Notes exist but none is selected.
    PleaseSelect { message: &'static str },
    EditForm(NoteForm),
    /// Read-only note with edit/delete affordances.
    Detail(Note),
}

/// One row of the list pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: NoteId,
    pub title: String,
    pub active: bool,
}

/// Borrowed snapshot of the state the view depends on.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub notes: &'a [Note],
    pub selected: Option<NoteId>,
    pub creating: bool,
    pub editing: bool,
    pub draft: &'a NoteDraft,
}

pub fn derive_view(state: &ViewState<'_>, messages: &Messages) -> NoteView {
    if state.creating {
        return NoteView::CreateForm(NoteForm {
            form_title: messages.create_form_title,
            title: state.draft.title.clone(),
            content: state.draft.content.clone(),
            submit_label: messages.save_label,
            action: FormAction::SaveNew,
        });
    }

    if state.notes.is_empty() {
        return NoteView::Empty {
            message: messages.no_notes,
        };
    }

    // A selection whose note is gone renders like no selection.
    let Some(note) = state
        .selected
        .and_then(|id| state.notes.iter().find(|note| note.id == id))
    else {
        return NoteView::PleaseSelect {
            message: messages.select_note,
        };
    };

    if state.editing {
        return NoteView::EditForm(NoteForm {
            form_title: messages.edit_form_title,
            title: state.draft.title.clone(),
            content: state.draft.content.clone(),
            submit_label: messages.update_label,
            action: FormAction::SaveEdit,
        });
    }

    NoteView::Detail(note.clone())
}

pub fn list_items(notes: &[Note], selected: Option<NoteId>) -> Vec<NoteListItem> {
    notes
        .iter()
        .map(|note| NoteListItem {
            id: note.id,
            title: note.title.clone(),
            active: selected == Some(note.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{derive_view, list_items, FormAction, NoteView, ViewState};
    use crate::model::note::{Note, NoteDraft, NoteId};
    use crate::view::messages::Locale;

    fn note(title: &str) -> Note {
        Note {
            id: NoteId::generate(),
            title: title.to_string(),
            content: format!("{title} body"),
        }
    }

    #[test]
    fn creating_wins_over_empty_collection() {
        let draft = NoteDraft::new("t", "");
        let state = ViewState {
            notes: &[],
            selected: None,
            creating: true,
            editing: false,
            draft: &draft,
        };
        match derive_view(&state, Locale::En.messages()) {
            NoteView::CreateForm(form) => {
                assert_eq!(form.action, FormAction::SaveNew);
                assert_eq!(form.title, "t");
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn dangling_selection_asks_for_selection() {
        let notes = vec![note("a")];
        let draft = NoteDraft::default();
        let state = ViewState {
            notes: &notes,
            selected: Some(NoteId::generate()),
            creating: false,
            editing: true,
            draft: &draft,
        };
        assert!(matches!(
            derive_view(&state, Locale::En.messages()),
            NoteView::PleaseSelect { .. }
        ));
    }

    #[test]
    fn list_items_mark_only_the_selected_note_active() {
        let notes = vec![note("a"), note("b")];
        let items = list_items(&notes, Some(notes[1].id));
        assert_eq!(
            items.iter().map(|item| item.active).collect::<Vec<_>>(),
            vec![false, true]
        );
        assert_eq!(items[0].title, "a");
    }
}
