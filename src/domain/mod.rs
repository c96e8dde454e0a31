//! Core types: Owner, Note, Label, LabelRef, Reminder, time input parsing

mod ids;
mod label;
mod note;
mod reminder;
mod when;

pub use ids::{LabelId, NoteId, Owner, ParseIdError, ReminderId};
pub use label::{Label, LabelRef, MAX_LABEL_NAME_LEN, ParseLabelRefError};
pub use note::Note;
pub use reminder::{ParseReminderTypeError, Reminder, ReminderType};
pub use when::{Clock, ParseTimeError, format_local, parse_when};
