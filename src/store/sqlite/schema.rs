//! SQLite schema creation for the note store.

use rusqlite::Connection;

/// Current schema version recorded in `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema for the note store.
///
/// Idempotent: calling it on an existing database changes nothing.
///
/// # Tables Created
/// - `notes` - Note content, status and expiry, scoped by `user_id`
/// - `labels` - Labels, names unique per `user_id`
/// - `label_note` - Many-to-many junction for labels and notes
/// - `reminders` - At most one reminder per (note, kind)
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            content TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0,
            expires_at TEXT,
            created_at TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS labels (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            color INTEGER,
            UNIQUE(user_id, name)
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS label_note (
            label_id INTEGER NOT NULL REFERENCES labels(id) ON DELETE CASCADE,
            note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            PRIMARY KEY (label_id, note_id)
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS reminders (
            id INTEGER PRIMARY KEY,
            note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            kind TEXT NOT NULL,
            remind_at TEXT NOT NULL,
            sent INTEGER NOT NULL DEFAULT 0,
            UNIQUE(note_id, kind)
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_notes_user_created ON notes(user_id, created_at);
         CREATE INDEX IF NOT EXISTS idx_notes_user_expires ON notes(user_id, expires_at);
         CREATE INDEX IF NOT EXISTS idx_label_note_note ON label_note(note_id);
         CREATE INDEX IF NOT EXISTS idx_reminders_remind_at ON reminders(remind_at);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}

/// Returns the current schema version.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get(0)
    })
}
