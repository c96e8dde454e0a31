//! Reminders and the channels they are delivered through.

use super::{NoteId, ReminderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery channel of a reminder. A note has at most one reminder per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    Email,
    Sms,
}

impl ReminderType {
    /// Every reminder type, in a stable order.
    pub const ALL: [ReminderType; 2] = [ReminderType::Email, ReminderType::Sms];

    /// Returns the stored name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }

    /// Returns the name of the form field carrying this reminder's time.
    pub fn field(self) -> &'static str {
        match self {
            Self::Email => "reminder_email",
            Self::Sms => "reminder_sms",
        }
    }
}

impl fmt::Display for ReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown reminder type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReminderTypeError(String);

impl fmt::Display for ParseReminderTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reminder type '{}'", self.0)
    }
}

impl std::error::Error for ParseReminderTypeError {}

impl FromStr for ReminderType {
    type Err = ParseReminderTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            _ => Err(ParseReminderTypeError(s.to_string())),
        }
    }
}

/// A scheduled reminder for a note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub note_id: NoteId,
    pub kind: ReminderType,
    pub remind_at: DateTime<Utc>,
    /// Set by the dispatcher once delivered.
    pub sent: bool,
}
