//! Task collection persistence contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide load/save APIs for the whole task collection.
//! - Keep SQL and JSON codec details inside the persistence boundary.
//!
//! # Invariants
//! - The collection is stored as one JSON document in a single named slot.
//! - `load` treats a missing slot or a trivially short body (two characters
//!   or fewer, e.g. an empty JSON array) as "no prior state".

use crate::db::DbError;
use crate::model::task::Task;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot name holding the serialized task collection.
pub const TASKS_SLOT: &str = "tasks";

/// Bodies at or below this length signal "treat as empty/no prior state".
const TRIVIAL_BODY_LEN: usize = 2;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence error for collection load/save operations.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Stored or outgoing document could not be decoded/encoded as JSON.
    Codec(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "malformed task collection document: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Durable-storage interface for the task collection.
pub trait CollectionStore {
    /// Reads the persisted collection.
    ///
    /// Returns `Ok(None)` when no usable prior state exists (missing slot or
    /// trivially short body). Malformed stored text is an error; the caller
    /// decides the fallback policy.
    fn load(&self) -> StorageResult<Option<Vec<Task>>>;

    /// Serializes and writes the full collection, overwriting prior content.
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}

/// SQLite-backed collection store writing one JSON document per slot.
pub struct SqliteCollectionStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCollectionStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CollectionStore for SqliteCollectionStore<'_> {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM slots WHERE slot = ?1;",
                params![TASKS_SLOT],
                |row| row.get(0),
            )
            .optional()?;

        let body = match body {
            Some(body) if body.chars().count() > TRIVIAL_BODY_LEN => body,
            Some(_) | None => {
                debug!("event=collection_load module=repo status=ok outcome=absent");
                return Ok(None);
            }
        };

        let tasks: Vec<Task> = serde_json::from_str(&body)?;
        debug!(
            "event=collection_load module=repo status=ok outcome=present count={}",
            tasks.len()
        );
        Ok(Some(tasks))
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let body = serde_json::to_string(tasks)?;

        self.conn.execute(
            "INSERT INTO slots (slot, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(slot) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![TASKS_SLOT, body],
        )?;

        debug!(
            "event=collection_save module=repo status=ok count={}",
            tasks.len()
        );
        Ok(())
    }
}
