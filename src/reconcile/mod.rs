//! Reconcilers that bring a note's labels and reminders in line with a form.
//!
//! Both operate on any [`NoteStore`](crate::store::NoteStore) and never open
//! transactions themselves. Callers run them inside one.

mod reminders;
mod tags;

pub use reminders::{ReminderAction, ReminderOutcome, reconcile_reminder};
pub use tags::{TagOutcome, reconcile_tags};

use crate::domain::{LabelId, ParseTimeError, ReminderType};
use crate::store::StoreError;
use thiserror::Error;

/// Errors raised while reconciling a note.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// A label id that the owner does not have.
    ///
    /// Raised the same way whether the id is unused or belongs to someone else.
    #[error("unknown label id {0}")]
    UnknownLabel(LabelId),

    /// A reminder time that could not be parsed.
    #[error("invalid {kind} reminder time: {source}")]
    Time {
        kind: ReminderType,
        #[source]
        source: ParseTimeError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
