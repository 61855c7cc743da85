//! Note collection slot on top of a key-value store.
//!
//! # Responsibility
//! - Encode/decode the ordered note collection as one JSON array.
//! - Reject persisted data that breaks the collection invariants.
//!
//! # Invariants
//! - Stored shape is `[{ "id", "title", "content" }, ...]` in collection order.
//! - Loaded collections never contain duplicate ids.

use crate::model::note::Note;
use crate::repo::kv_repo::{KvRepository, RepoError, RepoResult};
use log::{debug, error};
use std::collections::HashSet;

/// Default slot name, matching the historical storage layout.
pub const DEFAULT_NOTES_KEY: &str = "notes";

/// Repository interface for the persisted note collection.
pub trait NoteRepository {
    /// Loads the collection; `None` when the slot is absent (first run).
    fn load_notes(&self) -> RepoResult<Option<Vec<Note>>>;
    /// Replaces the stored collection with `notes`.
    fn save_notes(&mut self, notes: &[Note]) -> RepoResult<()>;
}

/// Stores the note collection as JSON under one slot of `K`.
pub struct KvNoteRepository<K: KvRepository> {
    kv: K,
    key: String,
}

impl<K: KvRepository> KvNoteRepository<K> {
    /// Uses the default `notes` slot.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, DEFAULT_NOTES_KEY)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read access to the raw store, e.g. to inspect the stored slot.
    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut K {
        &mut self.kv
    }

    pub fn into_inner(self) -> K {
        self.kv
    }
}

impl<K: KvRepository> NoteRepository for KvNoteRepository<K> {
    fn load_notes(&self) -> RepoResult<Option<Vec<Note>>> {
        let Some(raw) = self.kv.get(&self.key)? else {
            debug!("event=notes_load module=repo status=ok key={} slot=absent", self.key);
            return Ok(None);
        };

        let notes = decode_notes(&self.key, &raw).inspect_err(|err| {
            error!(
                "event=notes_load module=repo status=error key={} error_code=invalid_slot error={}",
                self.key, err
            );
        })?;
        debug!(
            "event=notes_load module=repo status=ok key={} count={}",
            self.key,
            notes.len()
        );
        Ok(Some(notes))
    }

    fn save_notes(&mut self, notes: &[Note]) -> RepoResult<()> {
        let encoded = serde_json::to_string(notes).map_err(RepoError::Serialization)?;
        self.kv.set(&self.key, &encoded)?;
        debug!(
            "event=notes_save module=repo status=ok key={} count={} bytes={}",
            self.key,
            notes.len(),
            encoded.len()
        );
        Ok(())
    }
}

fn decode_notes(key: &str, raw: &str) -> RepoResult<Vec<Note>> {
    let notes: Vec<Note> = serde_json::from_str(raw)
        .map_err(|err| RepoError::InvalidData(format!("slot `{key}` is not a note array: {err}")))?;

    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if !seen.insert(note.id) {
            return Err(RepoError::InvalidData(format!(
                "slot `{key}` contains duplicate note id {}",
                note.id
            )));
        }
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::{KvNoteRepository, NoteRepository};
    use crate::model::note::{Note, NoteId};
    use crate::repo::kv_repo::{KvRepository, MemoryKvRepository, RepoError};

    #[test]
    fn absent_slot_loads_as_none() {
        let repo = KvNoteRepository::new(MemoryKvRepository::new());
        assert_eq!(repo.load_notes().unwrap(), None);
    }

    #[test]
    fn duplicate_ids_are_rejected_on_load() {
        let id = NoteId::generate();
        let note = Note {
            id,
            title: "a".to_string(),
            content: "b".to_string(),
        };
        let mut kv = MemoryKvRepository::new();
        kv.set("notes", &serde_json::to_string(&[&note, &note]).unwrap())
            .unwrap();

        let repo = KvNoteRepository::new(kv);
        let err = repo.load_notes().unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(message) if message.contains("duplicate")));
    }

    #[test]
    fn saved_slot_uses_plain_note_array_shape() {
        let mut repo = KvNoteRepository::with_key(MemoryKvRepository::new(), "scratch");
        let note = Note {
            id: NoteId::generate(),
            title: "T".to_string(),
            content: "C".to_string(),
        };
        repo.save_notes(std::slice::from_ref(&note)).unwrap();

        let raw = repo.kv().get("scratch").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["id"], note.id.to_string());
        assert_eq!(json[0]["title"], "T");
        assert_eq!(json[0]["content"], "C");
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
