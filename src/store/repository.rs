//! NoteStore trait: the persistence primitives the reconcilers run on.

use super::StoreResult;
use crate::domain::{Label, LabelId, Note, NoteId, Owner, Reminder, ReminderId, ReminderType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Values for a note that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub owner: Owner,
    pub content: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// One page of an ordered listing.
///
/// Only whether another page exists is tracked, not the total count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Maps the items of a page, keeping its position.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            has_more: self.has_more,
        }
    }
}

/// Row-level persistence operations for notes, labels and reminders.
///
/// Every lookup that takes an [`Owner`] only sees that owner's rows; a row
/// belonging to someone else is reported as absent. Implementations do not
/// open transactions themselves; callers wrap a sequence of calls in one.
pub trait NoteStore {
    // Notes

    /// Loads a note if it exists and belongs to `owner`.
    fn note_for_owner(&self, owner: Owner, id: NoteId) -> StoreResult<Option<Note>>;

    /// Inserts a note with status "undone" and returns it.
    fn insert_note(&self, note: &NewNote) -> StoreResult<Note>;

    /// Saves content, status and expiry of an existing note.
    fn update_note(&self, note: &Note) -> StoreResult<()>;

    /// Deletes a note with its label links and reminders.
    ///
    /// Returns `false` if no note of `owner` had that id.
    fn delete_note(&self, owner: Owner, id: NoteId) -> StoreResult<bool>;

    // Labels

    /// Finds the owner's label with exactly this name.
    fn label_by_name(&self, owner: Owner, name: &str) -> StoreResult<Option<Label>>;

    /// Loads a label if it exists and belongs to `owner`.
    fn label_for_owner(&self, owner: Owner, id: LabelId) -> StoreResult<Option<Label>>;

    /// Creates a label and returns it.
    fn insert_label(&self, owner: Owner, name: &str, color: Option<i64>) -> StoreResult<Label>;

    // Note-label links

    /// Returns the ids of the labels linked to a note.
    fn note_label_ids(&self, note: NoteId) -> StoreResult<BTreeSet<LabelId>>;

    /// Links a label to a note. Linking twice is a no-op.
    fn attach_label(&self, note: NoteId, label: LabelId) -> StoreResult<()>;

    /// Unlinks a label from a note.
    fn detach_label(&self, note: NoteId, label: LabelId) -> StoreResult<()>;

    // Reminders

    /// Finds the note's reminder of the given type.
    fn reminder_for(&self, note: NoteId, kind: ReminderType) -> StoreResult<Option<Reminder>>;

    /// Creates an unsent reminder and returns it.
    fn insert_reminder(
        &self,
        note: NoteId,
        kind: ReminderType,
        remind_at: DateTime<Utc>,
    ) -> StoreResult<Reminder>;

    /// Moves a reminder to a new time and marks it unsent.
    fn update_reminder(&self, id: ReminderId, remind_at: DateTime<Utc>) -> StoreResult<()>;

    /// Deletes a reminder.
    fn delete_reminder(&self, id: ReminderId) -> StoreResult<()>;
}
