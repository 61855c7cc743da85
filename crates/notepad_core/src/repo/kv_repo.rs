//! Key-value store contracts and implementations.
//!
//! # Responsibility
//! - Provide `get`/`set` over named string slots.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `set` replaces the full value of a slot (upsert semantics).
//! - A failed `set` leaves the previous value readable.

use crate::db::DbError;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for slot reads/writes and collection decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialization(serde_json::Error),
    InvalidData(String),
    WriteRejected(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode notes: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::WriteRejected(key) => write!(f, "store rejected write to slot `{key}`"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidData(_) | Self::WriteRejected(_) | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable string store addressed by slot name.
pub trait KvRepository {
    /// Reads one slot; `None` when the slot was never written.
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    /// Writes one slot, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed store over the `kv_entries` table.
pub struct SqliteKvRepository {
    conn: Connection,
}

impl SqliteKvRepository {
    /// Wraps a migrated connection (see `db::open_db`).
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        if !table_exists(&conn, "kv_entries")? {
            return Err(RepoError::MissingRequiredTable("kv_entries"));
        }
        Ok(Self { conn })
    }
}

impl KvRepository for SqliteKvRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-process store with optional write-failure injection.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvRepository {
    entries: BTreeMap<String, String>,
    fail_writes: bool,
}

impl MemoryKvRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set` fail with `RepoError::WriteRejected`.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KvRepository for MemoryKvRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> RepoResult<()> {
        if self.fail_writes {
            warn!("event=kv_set module=repo status=error key={key} error_code=write_rejected");
            return Err(RepoError::WriteRejected(key.to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{KvRepository, MemoryKvRepository, RepoError, SqliteKvRepository};
    use rusqlite::Connection;

    #[test]
    fn memory_store_rejects_writes_when_armed() {
        let mut store = MemoryKvRepository::new();
        store.set("notes", "[]").unwrap();
        store.set_fail_writes(true);

        let err = store.set("notes", "[1]").unwrap_err();
        assert!(matches!(err, RepoError::WriteRejected(key) if key == "notes"));
        assert_eq!(store.get("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn sqlite_store_requires_migrated_connection() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteKvRepository::try_new(conn).err().unwrap();
        assert!(matches!(err, RepoError::MissingRequiredTable("kv_entries")));
    }
}
