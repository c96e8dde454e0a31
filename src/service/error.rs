//! Errors returned to callers of the note service.

use super::{FormErrors, NoteForm};
use crate::domain::{LabelId, NoteId, ParseLabelRefError};
use crate::reconcile::ReconcileError;
use crate::store::StoreError;
use thiserror::Error;

/// Why a note submission was not applied.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form has field errors. Nothing was written.
    ///
    /// Carries the submitted input so the form can be shown again as entered.
    #[error("invalid input: {errors}")]
    Invalid { errors: FormErrors, input: NoteForm },

    /// No note with this id belongs to the owner.
    #[error("note not found: {0}")]
    NotFound(NoteId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Returns the field errors if this is a validation failure.
    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            Self::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Records a reconcile failure as a field error, or passes store failures on.
pub(crate) fn collect_field_error(
    errors: &mut FormErrors,
    err: ReconcileError,
) -> Result<(), StoreError> {
    match err {
        ReconcileError::UnknownLabel(id) => {
            errors.add("labels", format!("unknown label id {}", id));
            Ok(())
        }
        ReconcileError::Time { kind, source } => {
            errors.add(kind.field(), source.to_string());
            Ok(())
        }
        ReconcileError::Store(e) => Err(e),
    }
}

/// Why a label operation failed.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("invalid label name: {0}")]
    InvalidName(#[from] ParseLabelRefError),

    #[error("label '{0}' already exists")]
    Duplicate(String),

    #[error("label not found: {0}")]
    NotFound(LabelId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
