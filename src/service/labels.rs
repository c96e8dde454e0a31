//! Direct label management, outside of note forms.

use super::LabelError;
use crate::domain::{Label, LabelId, LabelRef, Owner, ParseLabelRefError};
use crate::store::{NoteStore, SqliteStore};
use tracing::info;

/// Creates a label for the owner.
///
/// The name follows the same rules as a name typed into a note form, so an
/// all-digit name is rejected.
pub fn create_label(
    store: &SqliteStore,
    owner: Owner,
    name: &str,
    color: Option<i64>,
) -> Result<Label, LabelError> {
    let name = match LabelRef::parse(name)? {
        LabelRef::Name(name) => name,
        LabelRef::Id(id) => return Err(ParseLabelRefError::NumericName(id.to_string()).into()),
    };

    if store.conn().label_by_name(owner, &name)?.is_some() {
        return Err(LabelError::Duplicate(name));
    }

    let label = store.conn().insert_label(owner, &name, color)?;
    info!(label_id = %label.id, name = %label.name, "created label");
    Ok(label)
}

/// Deletes one of the owner's labels, detaching it from every note.
pub fn delete_label(store: &SqliteStore, owner: Owner, id: LabelId) -> Result<(), LabelError> {
    if !store.delete_label(owner, id)? {
        return Err(LabelError::NotFound(id));
    }
    info!(label_id = %id, "deleted label");
    Ok(())
}
