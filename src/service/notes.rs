//! Create, edit and read notes together with their labels and reminders.

use super::error::collect_field_error;
use super::{FormErrors, NoteForm, NoteSubmission, RequestContext, SubmitError};
use crate::domain::{Label, Note, NoteId, Owner, Reminder, ReminderType};
use crate::reconcile::{reconcile_reminder, reconcile_tags};
use crate::store::{NewNote, NoteStore, Page, SqliteStore, StoreError, StoreResult};
use serde::Serialize;
use tracing::{debug, error, info};

/// A note with its labels and reminders, as shown after a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteView {
    pub note: Note,
    pub labels: Vec<Label>,
    pub reminders: Vec<Reminder>,
}

impl NoteView {
    /// Returns the note's reminder of the given type.
    pub fn reminder(&self, kind: ReminderType) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.kind == kind)
    }
}

/// Creates a note from a form.
///
/// All writes happen in one transaction: if any field turns out to be
/// invalid, including a reminder time, no note, label or reminder is stored.
pub fn create_note(
    store: &mut SqliteStore,
    ctx: &RequestContext,
    form: NoteForm,
) -> Result<NoteView, SubmitError> {
    let submission = validate(&form, ctx)?;

    let tx = store.transaction()?;
    let note = tx.store().insert_note(&NewNote {
        owner: ctx.owner,
        content: submission.content.clone(),
        expires_at: submission.expires_at,
        created_at: ctx.clock.now,
    })?;

    let errors = apply_relations(tx.store(), ctx, note.id, &submission).map_err(log_store_error)?;
    if !errors.is_empty() {
        debug!(%errors, "rejected new note");
        return Err(SubmitError::Invalid {
            errors,
            input: form,
        });
    }
    tx.commit()?;

    info!(note_id = %note.id, owner = %ctx.owner, "created note");
    note_view(store, ctx.owner, note.id)
}

/// Replaces a note's content, expiry, labels and reminders with a form's.
///
/// A note of another owner is reported as not found. Atomic like
/// [`create_note`].
pub fn edit_note(
    store: &mut SqliteStore,
    ctx: &RequestContext,
    id: NoteId,
    form: NoteForm,
) -> Result<NoteView, SubmitError> {
    let mut note = store
        .conn()
        .note_for_owner(ctx.owner, id)?
        .ok_or(SubmitError::NotFound(id))?;
    let submission = validate(&form, ctx)?;

    let tx = store.transaction()?;
    note.content = submission.content.clone();
    note.expires_at = submission.expires_at;
    tx.store().update_note(&note)?;

    let errors = apply_relations(tx.store(), ctx, note.id, &submission).map_err(log_store_error)?;
    if !errors.is_empty() {
        debug!(note_id = %id, %errors, "rejected note edit");
        return Err(SubmitError::Invalid {
            errors,
            input: form,
        });
    }
    tx.commit()?;

    info!(note_id = %id, owner = %ctx.owner, "edited note");
    note_view(store, ctx.owner, id)
}

fn validate(form: &NoteForm, ctx: &RequestContext) -> Result<NoteSubmission, SubmitError> {
    form.validate(&ctx.clock)
        .map_err(|errors| SubmitError::Invalid {
            errors,
            input: form.clone(),
        })
}

/// Runs both reconcilers, collecting field errors instead of stopping at the
/// first so the form can report all of them. Store failures abort.
fn apply_relations<S: NoteStore + ?Sized>(
    store: &S,
    ctx: &RequestContext,
    note: NoteId,
    submission: &NoteSubmission,
) -> Result<FormErrors, StoreError> {
    let mut errors = FormErrors::new();

    if let Err(e) = reconcile_tags(store, ctx.owner, note, &submission.labels, ctx.label_color) {
        collect_field_error(&mut errors, e)?;
    }

    for kind in ReminderType::ALL {
        let raw = submission.reminder(kind);
        if let Err(e) = reconcile_reminder(store, note, kind, raw, &ctx.clock) {
            collect_field_error(&mut errors, e)?;
        }
    }

    Ok(errors)
}

fn log_store_error(e: StoreError) -> SubmitError {
    error!(error = %e, "store failure while reconciling note");
    SubmitError::Store(e)
}

/// Flips a note between done and undone. Returns the saved note.
pub fn toggle_status(
    store: &mut SqliteStore,
    owner: Owner,
    id: NoteId,
) -> Result<Note, SubmitError> {
    let mut note = store
        .conn()
        .note_for_owner(owner, id)?
        .ok_or(SubmitError::NotFound(id))?;
    note.done = !note.done;
    store.conn().update_note(&note)?;

    info!(note_id = %id, done = note.done, "changed note status");
    Ok(note)
}

/// Deletes a note with its label links and reminders.
pub fn remove_note(store: &mut SqliteStore, owner: Owner, id: NoteId) -> Result<(), SubmitError> {
    if !store.conn().delete_note(owner, id)? {
        return Err(SubmitError::NotFound(id));
    }
    info!(note_id = %id, "removed note");
    Ok(())
}

/// Loads one of the owner's notes with its relations.
pub fn note_view(store: &SqliteStore, owner: Owner, id: NoteId) -> Result<NoteView, SubmitError> {
    let note = store
        .conn()
        .note_for_owner(owner, id)?
        .ok_or(SubmitError::NotFound(id))?;
    Ok(load_relations(store, note)?)
}

fn load_relations(store: &SqliteStore, note: Note) -> StoreResult<NoteView> {
    Ok(NoteView {
        labels: store.labels_for_note(note.id)?,
        reminders: store.reminders_for_note(note.id)?,
        note,
    })
}

/// Returns one page of the owner's notes, newest first.
pub fn list_notes(
    store: &SqliteStore,
    owner: Owner,
    page: u32,
    per_page: u32,
) -> StoreResult<Page<NoteView>> {
    with_relations(store, store.notes_page(owner, page, per_page)?)
}

/// Returns one page of the owner's open notes with an expiry, soonest first.
pub fn list_upcoming(
    store: &SqliteStore,
    owner: Owner,
    page: u32,
    per_page: u32,
) -> StoreResult<Page<NoteView>> {
    with_relations(store, store.upcoming_page(owner, page, per_page)?)
}

fn with_relations(store: &SqliteStore, page: Page<Note>) -> StoreResult<Page<NoteView>> {
    let mut views = Vec::with_capacity(page.items.len());
    for note in page.items {
        views.push(load_relations(store, note)?);
    }
    Ok(Page {
        items: views,
        page: page.page,
        has_more: page.has_more,
    })
}
