//! Listing queries used by the read-only commands.

use super::SqliteStore;
use super::rows::{
    LABEL_COLUMNS, NOTE_COLUMNS, REMINDER_COLUMNS, encode_time, label_from_row, note_from_row,
    reminder_from_row,
};
use crate::domain::{Label, LabelId, Note, NoteId, Owner, Reminder};
use crate::store::{Page, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::{Params, Row};

impl SqliteStore {
    /// Returns one page of the owner's notes, newest first.
    pub fn notes_page(&self, owner: Owner, page: u32, per_page: u32) -> StoreResult<Page<Note>> {
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3"
        );
        self.page(&sql, owner, page, per_page, note_from_row)
    }

    /// Returns one page of the owner's open notes that have an expiry,
    /// soonest expiry first.
    pub fn upcoming_page(&self, owner: Owner, page: u32, per_page: u32) -> StoreResult<Page<Note>> {
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes
             WHERE user_id = ?1 AND done = 0 AND expires_at IS NOT NULL
             ORDER BY expires_at ASC, id ASC LIMIT ?2 OFFSET ?3"
        );
        self.page(&sql, owner, page, per_page, note_from_row)
    }

    fn page<T>(
        &self,
        sql: &str,
        owner: Owner,
        page: u32,
        per_page: u32,
        map: fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> StoreResult<Page<T>> {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let offset = i64::from(page - 1) * i64::from(per_page);

        // One extra row tells whether a next page exists
        let mut items = self.collect(
            sql,
            rusqlite::params![owner.get(), i64::from(per_page) + 1, offset],
            map,
        )?;
        let has_more = items.len() > per_page as usize;
        items.truncate(per_page as usize);

        Ok(Page {
            items,
            page,
            has_more,
        })
    }

    /// Returns all labels of the owner, sorted by name.
    pub fn labels(&self, owner: Owner) -> StoreResult<Vec<Label>> {
        self.collect(
            &format!("SELECT {LABEL_COLUMNS} FROM labels WHERE user_id = ? ORDER BY name, id"),
            [owner.get()],
            label_from_row,
        )
    }

    /// Returns the labels linked to a note, sorted by name.
    pub fn labels_for_note(&self, note: NoteId) -> StoreResult<Vec<Label>> {
        let columns = LABEL_COLUMNS
            .split(", ")
            .map(|c| format!("l.{c}"))
            .collect::<Vec<_>>()
            .join(", ");
        self.collect(
            &format!(
                "SELECT {columns} FROM labels l JOIN label_note ln ON l.id = ln.label_id
                 WHERE ln.note_id = ? ORDER BY l.name, l.id"
            ),
            [note.get()],
            label_from_row,
        )
    }

    /// Returns the reminders of a note, ordered by type.
    pub fn reminders_for_note(&self, note: NoteId) -> StoreResult<Vec<Reminder>> {
        self.collect(
            &format!("SELECT {REMINDER_COLUMNS} FROM reminders WHERE note_id = ? ORDER BY kind"),
            [note.get()],
            reminder_from_row,
        )
    }

    /// Returns the owner's reminders in trigger order.
    ///
    /// With `due_at`, only unsent reminders triggering at or before it.
    pub fn reminders(
        &self,
        owner: Owner,
        due_at: Option<DateTime<Utc>>,
    ) -> StoreResult<Vec<Reminder>> {
        let columns = REMINDER_COLUMNS
            .split(", ")
            .map(|c| format!("r.{c}"))
            .collect::<Vec<_>>()
            .join(", ");
        let base = format!(
            "SELECT {columns} FROM reminders r JOIN notes n ON n.id = r.note_id
             WHERE n.user_id = ?1"
        );

        match due_at {
            Some(at) => self.collect(
                &format!("{base} AND r.sent = 0 AND r.remind_at <= ?2 ORDER BY r.remind_at, r.id"),
                rusqlite::params![owner.get(), encode_time(at)],
                reminder_from_row,
            ),
            None => self.collect(
                &format!("{base} ORDER BY r.remind_at, r.id"),
                [owner.get()],
                reminder_from_row,
            ),
        }
    }

    /// Deletes one of the owner's labels, unlinking it from every note.
    ///
    /// Returns `false` if the owner has no label with that id.
    pub fn delete_label(&self, owner: Owner, id: LabelId) -> StoreResult<bool> {
        let rows = self.conn.execute(
            "DELETE FROM labels WHERE id = ? AND user_id = ?",
            [id.get(), owner.get()],
        )?;
        Ok(rows > 0)
    }

    fn collect<T>(
        &self,
        sql: &str,
        params: impl Params,
        map: fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> StoreResult<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let items = stmt
            .query_map(params, map)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }
}
