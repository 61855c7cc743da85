//! Note record, identity and draft validation.
//!
//! # Invariants
//! - `NoteId` values are time-ordered and collision resistant (UUIDv7).
//! - A draft is valid only when both `title` and `content` are non-empty.
//! - Whitespace counts as content; drafts are never trimmed.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of one note.
///
/// Serialized as the canonical hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Generates a new time-ordered id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Generates an id for which `is_taken` returns false, re-drawing on hit.
    pub fn generate_unique(is_taken: impl Fn(NoteId) -> bool) -> Self {
        loop {
            let candidate = Self::generate();
            if !is_taken(candidate) {
                return candidate;
            }
        }
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}

/// Persisted note record.
///
/// Wire shape is `{ "id", "title", "content" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Creates a note from an already validated draft.
    pub fn from_draft(id: NoteId, draft: &NoteDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
        }
    }
}

/// Missing required field detected at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingTitle,
    MissingContent,
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "note title is required"),
            Self::MissingContent => write!(f, "note content is required"),
        }
    }
}

/// Uncommitted title/content input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Seeds a draft from an existing note for editing.
    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }

    /// Returns missing fields in display order (title first).
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.title.is_empty() {
            issues.push(ValidationIssue::MissingTitle);
        }
        if self.content.is_empty() {
            issues.push(ValidationIssue::MissingContent);
        }
        issues
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteDraft, NoteId, ValidationIssue};

    #[test]
    fn issues_are_reported_title_first() {
        let draft = NoteDraft::default();
        assert_eq!(
            draft.issues(),
            vec![ValidationIssue::MissingTitle, ValidationIssue::MissingContent]
        );
    }

    #[test]
    fn whitespace_counts_as_content() {
        assert!(NoteDraft::new(" ", "\n").validate().is_ok());
    }

    #[test]
    fn generate_unique_skips_taken_ids() {
        let taken = NoteId::generate();
        let fresh = NoteId::generate_unique(|candidate| candidate == taken);
        assert_ne!(fresh, taken);
    }

    #[test]
    fn note_id_parses_its_display_form() {
        let id = NoteId::generate();
        let parsed: NoteId = id.to_string().parse().expect("display form should parse");
        assert_eq!(parsed, id);
    }
}
