//! Synchronizes a note's labels with the label list of a form.

use super::ReconcileError;
use crate::domain::{Label, LabelId, LabelRef, NoteId, Owner};
use crate::store::NoteStore;
use std::collections::BTreeSet;
use tracing::debug;

/// What [`reconcile_tags`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOutcome {
    /// The note's label set afterwards.
    pub labels: BTreeSet<LabelId>,
    /// Labels created for names the owner did not have yet.
    pub created: Vec<Label>,
    pub attached: Vec<LabelId>,
    pub detached: Vec<LabelId>,
}

/// Makes the labels of `note` exactly the set `refs` resolves to.
///
/// Id references must name labels of `owner`; names are looked up among the
/// owner's labels by exact match and created with `color` when missing. A
/// name given twice creates one label. Links already present and still
/// wanted are left alone.
///
/// The caller must have checked that `note` belongs to `owner`.
pub fn reconcile_tags<S: NoteStore + ?Sized>(
    store: &S,
    owner: Owner,
    note: NoteId,
    refs: &[LabelRef],
    color: Option<i64>,
) -> Result<TagOutcome, ReconcileError> {
    let mut outcome = TagOutcome::default();

    let mut names = Vec::new();
    for r in refs {
        match r {
            LabelRef::Id(id) => {
                if store.label_for_owner(owner, *id)?.is_none() {
                    return Err(ReconcileError::UnknownLabel(*id));
                }
                outcome.labels.insert(*id);
            }
            LabelRef::Name(name) => names.push(name.as_str()),
        }
    }

    for name in names {
        let id = match store.label_by_name(owner, name)? {
            Some(label) => label.id,
            None => {
                let label = store.insert_label(owner, name, color)?;
                debug!(label_id = %label.id, name = %label.name, "created label");
                let id = label.id;
                outcome.created.push(label);
                id
            }
        };
        outcome.labels.insert(id);
    }

    let current = store.note_label_ids(note)?;

    for &id in current.difference(&outcome.labels) {
        store.detach_label(note, id)?;
        outcome.detached.push(id);
    }
    for &id in outcome.labels.difference(&current) {
        store.attach_label(note, id)?;
        outcome.attached.push(id);
    }

    debug!(
        note_id = %note,
        labels = outcome.labels.len(),
        attached = outcome.attached.len(),
        detached = outcome.detached.len(),
        "reconciled labels"
    );
    Ok(outcome)
}
