//! Keeps at most one reminder per (note, type) in line with a form field.

use super::ReconcileError;
use crate::domain::{Clock, NoteId, Reminder, ReminderId, ReminderType, parse_when};
use crate::store::NoteStore;
use chrono::{DateTime, Utc};
use tracing::debug;

/// The change a reminder needs, decided from what exists and what was asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderAction {
    /// No reminder exists and none was asked for.
    Keep,
    Create { at: DateTime<Utc> },
    Update { reminder: Reminder, at: DateTime<Utc> },
    Delete { reminder: Reminder },
}

impl ReminderAction {
    /// Maps (existing reminder, requested time) to the action that makes them agree.
    pub fn plan(existing: Option<Reminder>, requested: Option<DateTime<Utc>>) -> Self {
        match (existing, requested) {
            (Some(reminder), Some(at)) => Self::Update { reminder, at },
            (None, Some(at)) => Self::Create { at },
            (Some(reminder), None) => Self::Delete { reminder },
            (None, None) => Self::Keep,
        }
    }
}

/// What [`reconcile_reminder`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderOutcome {
    Unchanged,
    Created(Reminder),
    Updated(Reminder),
    Deleted(ReminderId),
}

/// Creates, moves or deletes the note's reminder of `kind` to match `raw`.
///
/// `raw` that is absent, empty or only whitespace means "no reminder". Any
/// other value must parse with [`parse_when`]; it is parsed before anything
/// is written. Moving a reminder to the time it already has writes nothing,
/// so a delivered reminder is not re-armed by an unrelated edit.
pub fn reconcile_reminder<S: NoteStore + ?Sized>(
    store: &S,
    note: NoteId,
    kind: ReminderType,
    raw: Option<&str>,
    clock: &Clock,
) -> Result<ReminderOutcome, ReconcileError> {
    let requested = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_when(s, clock))
        .transpose()
        .map_err(|source| ReconcileError::Time { kind, source })?;

    let existing = store.reminder_for(note, kind)?;
    let action = ReminderAction::plan(existing, requested);
    debug!(note_id = %note, %kind, ?action, "reconciling reminder");

    let outcome = match action {
        ReminderAction::Keep => ReminderOutcome::Unchanged,
        ReminderAction::Create { at } => {
            ReminderOutcome::Created(store.insert_reminder(note, kind, at)?)
        }
        ReminderAction::Update { reminder, at } if reminder.remind_at == at => {
            debug!(reminder_id = %reminder.id, "reminder time unchanged");
            ReminderOutcome::Unchanged
        }
        ReminderAction::Update { reminder, at } => {
            store.update_reminder(reminder.id, at)?;
            ReminderOutcome::Updated(Reminder {
                remind_at: at,
                sent: false,
                ..reminder
            })
        }
        ReminderAction::Delete { reminder } => {
            store.delete_reminder(reminder.id)?;
            ReminderOutcome::Deleted(reminder.id)
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Owner, ParseTimeError};
    use crate::store::{NewNote, SqliteStore};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn clock() -> Clock {
        Clock::utc(Utc.with_ymd_and_hms(2024, 12, 1, 9, 0, 0).unwrap())
    }

    fn t(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, h, 0, 0).unwrap()
    }

    fn setup() -> (SqliteStore, NoteId) {
        let store = SqliteStore::open_in_memory().unwrap();
        let note = store
            .conn()
            .insert_note(&NewNote {
                owner: Owner::new(1),
                content: "call the dentist".to_string(),
                expires_at: None,
                created_at: clock().now,
            })
            .unwrap();
        (store, note.id)
    }

    fn reminder(id: i64, at: DateTime<Utc>) -> Reminder {
        Reminder {
            id: ReminderId::new(id),
            note_id: NoteId::new(1),
            kind: ReminderType::Email,
            remind_at: at,
            sent: false,
        }
    }

    // ===========================================
    // Planning matrix
    // ===========================================

    #[test]
    fn plan_covers_all_four_cases() {
        let r = reminder(1, t(10));
        assert_eq!(
            ReminderAction::plan(Some(r.clone()), Some(t(11))),
            ReminderAction::Update {
                reminder: r.clone(),
                at: t(11)
            }
        );
        assert_eq!(
            ReminderAction::plan(None, Some(t(11))),
            ReminderAction::Create { at: t(11) }
        );
        assert_eq!(
            ReminderAction::plan(Some(r.clone()), None),
            ReminderAction::Delete { reminder: r }
        );
        assert_eq!(ReminderAction::plan(None, None), ReminderAction::Keep);
    }

    // ===========================================
    // Applying against a store
    // ===========================================

    #[test]
    fn nothing_and_empty_input_stays_nothing() {
        let (store, note) = setup();

        for raw in [None, Some(""), Some("   ")] {
            let outcome =
                reconcile_reminder(store.conn(), note, ReminderType::Email, raw, &clock()).unwrap();
            assert_eq!(outcome, ReminderOutcome::Unchanged);
        }
        assert!(store.reminders_for_note(note).unwrap().is_empty());
    }

    #[test]
    fn input_without_reminder_creates_one() {
        let (store, note) = setup();

        let outcome = reconcile_reminder(
            store.conn(),
            note,
            ReminderType::Email,
            Some("2025-01-01 10:00"),
            &clock(),
        )
        .unwrap();

        let stored = store.reminders_for_note(note).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].remind_at, t(10));
        assert_eq!(stored[0].kind, ReminderType::Email);
        assert_eq!(outcome, ReminderOutcome::Created(stored[0].clone()));
    }

    #[test]
    fn empty_input_deletes_existing() {
        let (store, note) = setup();
        let existing = store
            .conn()
            .insert_reminder(note, ReminderType::Email, t(10))
            .unwrap();

        let outcome =
            reconcile_reminder(store.conn(), note, ReminderType::Email, Some(""), &clock()).unwrap();

        assert_eq!(outcome, ReminderOutcome::Deleted(existing.id));
        assert_eq!(store.conn().reminder_for(note, ReminderType::Email).unwrap(), None);
    }

    #[test]
    fn new_time_updates_same_reminder() {
        let (store, note) = setup();
        let existing = store
            .conn()
            .insert_reminder(note, ReminderType::Email, t(10))
            .unwrap();

        let outcome = reconcile_reminder(
            store.conn(),
            note,
            ReminderType::Email,
            Some("2025-01-01 12:00"),
            &clock(),
        )
        .unwrap();

        let stored = store
            .conn()
            .reminder_for(note, ReminderType::Email)
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, existing.id);
        assert_eq!(stored.remind_at, t(12));
        assert_eq!(outcome, ReminderOutcome::Updated(stored));
    }

    #[test]
    fn same_time_writes_nothing() {
        let (store, note) = setup();
        let existing = store
            .conn()
            .insert_reminder(note, ReminderType::Email, t(10))
            .unwrap();
        store
            .conn()
            .execute("UPDATE reminders SET sent = 1 WHERE id = ?", [existing.id.get()])
            .unwrap();

        let outcome = reconcile_reminder(
            store.conn(),
            note,
            ReminderType::Email,
            Some("2025-01-01 10:00"),
            &clock(),
        )
        .unwrap();

        assert_eq!(outcome, ReminderOutcome::Unchanged);
        let stored = store
            .conn()
            .reminder_for(note, ReminderType::Email)
            .unwrap()
            .unwrap();
        assert!(stored.sent, "delivered reminder stays delivered");
    }

    #[test]
    fn types_are_independent() {
        let (store, note) = setup();
        store
            .conn()
            .insert_reminder(note, ReminderType::Sms, t(8))
            .unwrap();

        reconcile_reminder(
            store.conn(),
            note,
            ReminderType::Email,
            Some("2025-01-01 10:00"),
            &clock(),
        )
        .unwrap();

        let kinds: Vec<_> = store
            .reminders_for_note(note)
            .unwrap()
            .into_iter()
            .map(|r| (r.kind, r.remind_at))
            .collect();
        assert_eq!(
            kinds,
            vec![(ReminderType::Email, t(10)), (ReminderType::Sms, t(8))]
        );
    }

    #[test]
    fn unparseable_input_changes_nothing() {
        let (store, note) = setup();
        let existing = store
            .conn()
            .insert_reminder(note, ReminderType::Sms, t(10))
            .unwrap();

        let err = reconcile_reminder(
            store.conn(),
            note,
            ReminderType::Sms,
            Some("someday"),
            &clock(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ReconcileError::Time {
                kind: ReminderType::Sms,
                source: ParseTimeError::Unrecognized(_)
            }
        ));
        assert_eq!(
            store.conn().reminder_for(note, ReminderType::Sms).unwrap(),
            Some(existing)
        );
    }

    #[test]
    fn relative_input_uses_clock() {
        let (store, note) = setup();

        reconcile_reminder(store.conn(), note, ReminderType::Sms, Some("+2h"), &clock()).unwrap();

        let stored = store
            .conn()
            .reminder_for(note, ReminderType::Sms)
            .unwrap()
            .unwrap();
        assert_eq!(stored.remind_at, clock().now + chrono::Duration::hours(2));
    }
}
