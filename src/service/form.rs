//! Raw note form input and its validated, typed counterpart.

use super::NoteView;
use crate::domain::{Clock, LabelRef, ReminderType, format_local, parse_when};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field-keyed validation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages for a field, empty if it has none.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| (field.as_str(), m.as_str())))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// A note form as submitted, every field still a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoteForm {
    pub content: String,
    pub expires_at: Option<String>,
    /// Label ids or names, mixed.
    pub labels: Vec<String>,
    /// Requested trigger time per reminder type. A missing entry or an empty
    /// value both mean "no reminder of this type".
    pub reminders: BTreeMap<ReminderType, Option<String>>,
}

/// A note form after boundary validation.
///
/// Reminder times stay raw: the reminder reconciler parses them so a bad
/// value surfaces as a reminder field error from inside the transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSubmission {
    pub content: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub labels: Vec<LabelRef>,
    pub reminders: BTreeMap<ReminderType, Option<String>>,
}

impl NoteSubmission {
    /// Returns the raw reminder input for a type, if any.
    pub fn reminder(&self, kind: ReminderType) -> Option<&str> {
        self.reminders.get(&kind).and_then(|raw| raw.as_deref())
    }
}

impl NoteForm {
    /// Sets the raw reminder input for a type.
    pub fn set_reminder(&mut self, kind: ReminderType, raw: impl Into<String>) {
        self.reminders.insert(kind, Some(raw.into()));
    }

    /// Builds the form an edit starts from: the note as it currently is.
    ///
    /// Labels are listed by id; times are written in `offset`.
    pub fn from_view(view: &NoteView, offset: FixedOffset) -> Self {
        Self {
            content: view.note.content.clone(),
            expires_at: view.note.expires_at.map(|at| format_local(at, offset)),
            labels: view.labels.iter().map(|l| l.id.to_string()).collect(),
            reminders: view
                .reminders
                .iter()
                .map(|r| (r.kind, Some(format_local(r.remind_at, offset))))
                .collect(),
        }
    }

    /// Checks required fields and converts everything but reminder times.
    pub fn validate(&self, clock: &Clock) -> Result<NoteSubmission, FormErrors> {
        let mut errors = FormErrors::new();

        if self.content.trim().is_empty() {
            errors.add("content", "content is required");
        }

        let expires_at = match self.expires_at.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match parse_when(raw, clock) {
                Ok(at) => Some(at),
                Err(e) => {
                    errors.add("expires_at", e.to_string());
                    None
                }
            },
        };

        let mut labels = Vec::with_capacity(self.labels.len());
        for token in &self.labels {
            match LabelRef::parse(token) {
                Ok(r) => labels.push(r),
                Err(e) => errors.add("labels", e.to_string()),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NoteSubmission {
            content: self.content.clone(),
            expires_at,
            labels,
            reminders: self.reminders.clone(),
        })
    }
}
