//! SQLite-backed note store implementation.

mod connection;
mod queries;
mod repo_impl;
mod rows;
mod schema;
mod transaction;


use rusqlite::Connection;

pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Owns the database connection. Reads go straight to the connection;
/// multi-step writes go through [`SqliteStore::transaction`].
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
