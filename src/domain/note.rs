//! The note entity.

use super::{NoteId, Owner};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored note.
///
/// Labels and reminders live in their own tables; see
/// [`crate::service::NoteView`] for the note together with its relations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub owner: Owner,
    pub content: String,
    /// `true` once the note is marked done.
    pub done: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Returns true if the note has an expiry at or before `now` and is not done.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.done && self.expires_at.is_some_and(|at| at <= now)
    }
}
