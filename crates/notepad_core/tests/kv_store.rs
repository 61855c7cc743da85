use notepad_core::db::{open_db, open_db_in_memory};
use notepad_core::{
    KvNoteRepository, KvRepository, Note, NoteId, NoteRepository, RepoError, SqliteKvRepository,
};

fn sample_notes() -> Vec<Note> {
    ["first", "second", "third"]
        .into_iter()
        .map(|title| Note {
            id: NoteId::generate(),
            title: title.to_string(),
            content: format!("{title} body"),
        })
        .collect()
}

#[test]
fn sqlite_set_replaces_existing_slot() {
    let mut kv = SqliteKvRepository::try_new(open_db_in_memory().unwrap()).unwrap();
    assert_eq!(kv.get("notes").unwrap(), None);

    kv.set("notes", "[]").unwrap();
    kv.set("notes", "[1]").unwrap();
    kv.set("other", "x").unwrap();

    assert_eq!(kv.get("notes").unwrap().as_deref(), Some("[1]"));
    assert_eq!(kv.get("other").unwrap().as_deref(), Some("x"));
}

#[test]
fn collection_round_trips_through_file_store_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notepad.sqlite3");
    let notes = sample_notes();

    {
        let kv = SqliteKvRepository::try_new(open_db(&path).unwrap()).unwrap();
        let mut repo = KvNoteRepository::new(kv);
        repo.save_notes(&notes).unwrap();
    }

    let kv = SqliteKvRepository::try_new(open_db(&path).unwrap()).unwrap();
    let repo = KvNoteRepository::new(kv);
    assert_eq!(repo.load_notes().unwrap(), Some(notes));
}

#[test]
fn malformed_slot_is_reported_as_invalid_data() {
    let mut kv = SqliteKvRepository::try_new(open_db_in_memory().unwrap()).unwrap();
    kv.set("notes", "{\"not\": \"an array\"}").unwrap();

    let repo = KvNoteRepository::new(kv);
    let err = repo.load_notes().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)), "unexpected error: {err}");
}

#[test]
fn slots_are_isolated_by_key() {
    let kv = SqliteKvRepository::try_new(open_db_in_memory().unwrap()).unwrap();
    let mut work = KvNoteRepository::with_key(kv, "work");
    work.save_notes(&sample_notes()).unwrap();

    let home = KvNoteRepository::with_key(work.into_inner(), "home");
    assert_eq!(home.load_notes().unwrap(), None);
}
