//! Row decoding shared by the store implementation and its queries.

use crate::domain::{Label, LabelId, Note, NoteId, Owner, Reminder, ReminderId, ReminderType};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use rusqlite::types::Type;

pub(crate) const NOTE_COLUMNS: &str = "id, user_id, content, done, expires_at, created_at";
pub(crate) const LABEL_COLUMNS: &str = "id, user_id, name, color";
pub(crate) const REMINDER_COLUMNS: &str = "id, note_id, kind, remind_at, sent";

/// Encodes a timestamp as fixed-width RFC 3339 so text order is time order.
pub(crate) fn encode_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_time(idx: usize, text: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn time_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let text: String = row.get(idx)?;
    decode_time(idx, &text)
}

fn optional_time_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let text: Option<String> = row.get(idx)?;
    text.map(|t| decode_time(idx, &t)).transpose()
}

/// Decodes a row selected with [`NOTE_COLUMNS`].
pub(crate) fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: NoteId::new(row.get(0)?),
        owner: Owner::new(row.get(1)?),
        content: row.get(2)?,
        done: row.get(3)?,
        expires_at: optional_time_at(row, 4)?,
        created_at: time_at(row, 5)?,
    })
}

/// Decodes a row selected with [`LABEL_COLUMNS`].
pub(crate) fn label_from_row(row: &Row<'_>) -> rusqlite::Result<Label> {
    Ok(Label {
        id: LabelId::new(row.get(0)?),
        owner: Owner::new(row.get(1)?),
        name: row.get(2)?,
        color: row.get(3)?,
    })
}

/// Decodes a row selected with [`REMINDER_COLUMNS`].
pub(crate) fn reminder_from_row(row: &Row<'_>) -> rusqlite::Result<Reminder> {
    let kind: String = row.get(2)?;
    let kind: ReminderType = kind
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(Reminder {
        id: ReminderId::new(row.get(0)?),
        note_id: NoteId::new(row.get(1)?),
        kind,
        remind_at: time_at(row, 3)?,
        sent: row.get(4)?,
    })
}
