//! Integer identifiers for owners and stored rows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError(String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database id.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw database id.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseIdError(format!("invalid {} id '{}'", $what, s)));
                }
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|_| ParseIdError(format!("{} id out of range: {}", $what, s)))
            }
        }
    };
}

row_id!(
    /// The user on whose behalf an operation runs.
    ///
    /// Every lookup and mutation is scoped to one owner. Callers pass it
    /// explicitly; nothing in the crate reads an ambient "current user".
    Owner,
    "user"
);

row_id!(
    /// Identifier of a stored note.
    NoteId,
    "note"
);

row_id!(
    /// Identifier of a stored label.
    LabelId,
    "label"
);

row_id!(
    /// Identifier of a stored reminder.
    ReminderId,
    "reminder"
);
