//! Opening a note store and starting transactions on it.

use super::SqliteStore;
use super::transaction::Transaction;
use crate::store::{StoreError, StoreResult, create_schema};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Turns on foreign key enforcement and creates any missing tables.
///
/// SQLite leaves foreign keys off per connection, so this must run on every
/// open. Without it, deleting a note would leave its `label_note` rows and
/// reminders behind, and deleting a label would not detach it from notes.
fn prepare(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    create_schema(conn)?;
    Ok(())
}

impl SqliteStore {
    /// Opens a private in-memory store. Its contents vanish with the value.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        prepare(&conn)?;
        Ok(Self { conn })
    }

    /// Opens the store file at `path`, creating it and its directory on first use.
    ///
    /// The returned store enforces foreign keys: removing a note cascades to
    /// its label links and reminders, and removing a label drops its links.
    /// Existing data is kept; only tables that don't exist yet are created.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        prepare(&conn)?;
        tracing::debug!(path = %path.display(), "opened note store");
        Ok(Self { conn })
    }

    /// The raw connection, for reads outside a transaction.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Starts a write transaction.
    ///
    /// Takes `&mut self` so nothing else can use the store until the
    /// returned [`Transaction`] is committed or dropped.
    pub fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        self.conn.execute_batch("BEGIN")?;
        Ok(Transaction::new(&self.conn))
    }
}
