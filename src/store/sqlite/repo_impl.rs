//! NoteStore trait implementation for a SQLite connection.
//!
//! Implemented on the connection rather than on [`super::SqliteStore`] so the
//! same code runs both inside a [`super::Transaction`] and outside of one.

use super::rows::{
    LABEL_COLUMNS, NOTE_COLUMNS, REMINDER_COLUMNS, encode_time, label_from_row, note_from_row,
    reminder_from_row,
};
use crate::domain::{Label, LabelId, Note, NoteId, Owner, Reminder, ReminderId, ReminderType};
use crate::store::{NewNote, NoteStore, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeSet;

impl NoteStore for Connection {
    fn note_for_owner(&self, owner: Owner, id: NoteId) -> StoreResult<Option<Note>> {
        let note = self
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ? AND user_id = ?"),
                [id.get(), owner.get()],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    fn insert_note(&self, note: &NewNote) -> StoreResult<Note> {
        self.execute(
            "INSERT INTO notes (user_id, content, done, expires_at, created_at)
             VALUES (?1, ?2, 0, ?3, ?4)",
            params![
                note.owner.get(),
                note.content,
                note.expires_at.map(encode_time),
                encode_time(note.created_at),
            ],
        )?;

        Ok(Note {
            id: NoteId::new(self.last_insert_rowid()),
            owner: note.owner,
            content: note.content.clone(),
            done: false,
            expires_at: note.expires_at,
            created_at: note.created_at,
        })
    }

    fn update_note(&self, note: &Note) -> StoreResult<()> {
        let rows = self.execute(
            "UPDATE notes SET content = ?1, done = ?2, expires_at = ?3
             WHERE id = ?4 AND user_id = ?5",
            params![
                note.content,
                note.done,
                note.expires_at.map(encode_time),
                note.id.get(),
                note.owner.get(),
            ],
        )?;

        if rows == 0 {
            return Err(StoreError::NoteNotFound { id: note.id });
        }
        Ok(())
    }

    fn delete_note(&self, owner: Owner, id: NoteId) -> StoreResult<bool> {
        let rows = self.execute(
            "DELETE FROM notes WHERE id = ? AND user_id = ?",
            [id.get(), owner.get()],
        )?;
        Ok(rows > 0)
    }

    fn label_by_name(&self, owner: Owner, name: &str) -> StoreResult<Option<Label>> {
        let label = self
            .query_row(
                &format!("SELECT {LABEL_COLUMNS} FROM labels WHERE user_id = ? AND name = ?"),
                params![owner.get(), name],
                label_from_row,
            )
            .optional()?;
        Ok(label)
    }

    fn label_for_owner(&self, owner: Owner, id: LabelId) -> StoreResult<Option<Label>> {
        let label = self
            .query_row(
                &format!("SELECT {LABEL_COLUMNS} FROM labels WHERE id = ? AND user_id = ?"),
                [id.get(), owner.get()],
                label_from_row,
            )
            .optional()?;
        Ok(label)
    }

    fn insert_label(&self, owner: Owner, name: &str, color: Option<i64>) -> StoreResult<Label> {
        self.execute(
            "INSERT INTO labels (user_id, name, color) VALUES (?1, ?2, ?3)",
            params![owner.get(), name, color],
        )?;

        Ok(Label {
            id: LabelId::new(self.last_insert_rowid()),
            owner,
            name: name.to_string(),
            color,
        })
    }

    fn note_label_ids(&self, note: NoteId) -> StoreResult<BTreeSet<LabelId>> {
        let mut stmt = self.prepare("SELECT label_id FROM label_note WHERE note_id = ?")?;
        let ids = stmt
            .query_map([note.get()], |row| row.get::<_, i64>(0))?
            .map(|r| r.map(LabelId::new))
            .collect::<rusqlite::Result<BTreeSet<_>>>()?;
        Ok(ids)
    }

    fn attach_label(&self, note: NoteId, label: LabelId) -> StoreResult<()> {
        self.execute(
            "INSERT OR IGNORE INTO label_note (label_id, note_id) VALUES (?, ?)",
            [label.get(), note.get()],
        )?;
        Ok(())
    }

    fn detach_label(&self, note: NoteId, label: LabelId) -> StoreResult<()> {
        self.execute(
            "DELETE FROM label_note WHERE label_id = ? AND note_id = ?",
            [label.get(), note.get()],
        )?;
        Ok(())
    }

    fn reminder_for(&self, note: NoteId, kind: ReminderType) -> StoreResult<Option<Reminder>> {
        let reminder = self
            .query_row(
                &format!("SELECT {REMINDER_COLUMNS} FROM reminders WHERE note_id = ? AND kind = ?"),
                params![note.get(), kind.as_str()],
                reminder_from_row,
            )
            .optional()?;
        Ok(reminder)
    }

    fn insert_reminder(
        &self,
        note: NoteId,
        kind: ReminderType,
        remind_at: DateTime<Utc>,
    ) -> StoreResult<Reminder> {
        self.execute(
            "INSERT INTO reminders (note_id, kind, remind_at, sent) VALUES (?1, ?2, ?3, 0)",
            params![note.get(), kind.as_str(), encode_time(remind_at)],
        )?;

        Ok(Reminder {
            id: ReminderId::new(self.last_insert_rowid()),
            note_id: note,
            kind,
            remind_at,
            sent: false,
        })
    }

    fn update_reminder(&self, id: ReminderId, remind_at: DateTime<Utc>) -> StoreResult<()> {
        self.execute(
            "UPDATE reminders SET remind_at = ?1, sent = 0 WHERE id = ?2",
            params![encode_time(remind_at), id.get()],
        )?;
        Ok(())
    }

    fn delete_reminder(&self, id: ReminderId) -> StoreResult<()> {
        self.execute("DELETE FROM reminders WHERE id = ?", [id.get()])?;
        Ok(())
    }
}
