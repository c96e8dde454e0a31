//! Note submissions: validation, transactional reconciliation, and reads.

mod error;
mod form;
mod labels;
mod notes;

pub use error::{LabelError, SubmitError};
pub use form::{FormErrors, NoteForm, NoteSubmission};
pub use labels::{create_label, delete_label};
pub use notes::{
    NoteView, create_note, edit_note, list_notes, list_upcoming, note_view, remove_note,
    toggle_status,
};

use crate::domain::{Clock, Owner};

/// Who is acting, when, and the defaults their submissions use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestContext {
    pub owner: Owner,
    pub clock: Clock,
    /// Color given to labels created from a note form.
    pub label_color: Option<i64>,
}
