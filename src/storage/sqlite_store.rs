//! SQLite-backed record storage.
//!
//! One table keyed by callsign, persisted to a file in the per-user cache
//! directory. The store is owned exclusively by the process for the duration
//! of a run; the connection is closed when the store is dropped, on every
//! exit path.

use crate::error::{StorageError, StorageResult};
use crate::types::Record;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

/// Name of the single table holding license records.
pub const TABLE_NAME: &str = "mytable";

const CREATE_TABLE_SQL: &str = "\
    CREATE TABLE IF NOT EXISTS mytable (
        callsign TEXT PRIMARY KEY,
        firstname TEXT,
        lastname TEXT,
        address TEXT,
        city TEXT,
        state TEXT
    )";

/// Persistent table of [`Record`]s keyed by callsign.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) the database at the given path.
    ///
    /// Ensures the table exists, so a freshly created store answers queries
    /// with an empty result set rather than a missing-table error.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open an in-memory store. Used by tests.
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn ensure_schema(&self) -> StorageResult<()> {
        self.conn.execute(CREATE_TABLE_SQL, [])?;
        Ok(())
    }

    /// Drop any existing table and recreate it empty.
    ///
    /// Destructive; intended only to precede a full reload.
    pub fn initialize(&self) -> StorageResult<()> {
        self.conn
            .execute(&format!("DROP TABLE IF EXISTS {TABLE_NAME}"), [])?;
        self.conn.execute(CREATE_TABLE_SQL, [])?;
        debug!(table = TABLE_NAME, "table dropped and recreated");
        Ok(())
    }

    /// Insert one record.
    ///
    /// Fails if the callsign already exists (primary-key violation); see
    /// [`StorageError::is_duplicate`].
    pub fn insert(&self, record: &Record) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO mytable (callsign, firstname, lastname, address, city, state)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &record.callsign,
                &record.firstname,
                &record.lastname,
                &record.address,
                &record.city,
                &record.state
            ],
        )?;

        Ok(())
    }

    /// Return all records whose callsign matches the given SQL `LIKE`
    /// pattern. A pattern without `%` or `_` is an exact match.
    ///
    /// No matches is an empty vector, not an error.
    pub fn query(&self, pattern: &str) -> StorageResult<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            "SELECT callsign, firstname, lastname, address, city, state
             FROM mytable
             WHERE callsign LIKE ?1",
        )?;

        let records = stmt
            .query_map([pattern], |row| {
                Ok(Record {
                    callsign: row.get(0)?,
                    firstname: row.get(1)?,
                    lastname: row.get(2)?,
                    address: row.get(3)?,
                    city: row.get(4)?,
                    state: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Number of records currently stored.
    pub fn len(&self) -> StorageResult<usize> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {TABLE_NAME}"), [], |row| {
                row.get(0)
            })?;

        Ok(count as usize)
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}
