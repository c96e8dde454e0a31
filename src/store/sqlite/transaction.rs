//! Write transaction over a [`SqliteStore`](super::SqliteStore).

use crate::store::StoreResult;
use rusqlite::Connection;

/// An open `BEGIN` on the store's connection.
///
/// A note save touches several tables (the note, its label links, each
/// reminder). Running every write through [`Transaction::store`] makes the
/// save all-or-nothing: only [`Transaction::commit`] makes it visible, and
/// dropping the value on any earlier return, `?` included, rolls it back.
pub struct Transaction<'a> {
    conn: &'a Connection,
    committed: bool,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            committed: false,
        }
    }

    /// [`NoteStore`](crate::store::NoteStore) handle whose writes belong to this transaction.
    pub fn store(&self) -> &Connection {
        self.conn
    }

    pub fn commit(mut self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed
            && let Err(e) = self.conn.execute_batch("ROLLBACK")
        {
            tracing::warn!(error = %e, "rollback failed");
        }
    }
}
