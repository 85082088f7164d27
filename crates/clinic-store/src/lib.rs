//! SQLite persistence for the clinic importer.
//!
//! One [`Database`] wraps the single connection held for the whole run. The
//! schema is created idempotently on open; inserts use
//! `INSERT OR IGNORE` so re-importing the same files never duplicates rows.

mod counters;
mod invoices;
mod parents;
mod patients;
mod report;
mod schema;
mod soap;
mod visits;

pub use schema::SCHEMA;

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("unknown table: {0}")]
    UnknownTable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `path`, creating the file and schema if needed.
    ///
    /// Referential integrity is disabled and the journal switched to WAL for
    /// the duration of the run; the importer assumes exclusive single-writer
    /// access.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.pragma_update(None, "foreign_keys", false)?;
        // journal_mode returns the resulting mode as a row
        let _mode: String =
            conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create tables and seed counters; a no-op when they already exist.
    fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Raw connection for ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begin a batch transaction; committed once per source file.
    pub fn begin(&self) -> StoreResult<rusqlite::Transaction<'_>> {
        Ok(self.conn.unchecked_transaction()?)
    }
}
