//! Labels and the raw references a note form uses to point at them.

use super::{LabelId, Owner};
use serde::Serialize;
use thiserror::Error;

/// Longest label name accepted from a form, in characters.
pub const MAX_LABEL_NAME_LEN: usize = 255;

/// A user-owned label that notes can be tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub id: LabelId,
    pub owner: Owner,
    pub name: String,
    /// Palette index, if one was chosen.
    pub color: Option<i64>,
}

/// Error returned when a label token cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLabelRefError {
    #[error("label name cannot be empty")]
    Empty,

    #[error("label name is longer than {MAX_LABEL_NAME_LEN} characters")]
    TooLong,

    /// A name that would be indistinguishable from an id reference.
    #[error("label name '{0}' cannot be a number")]
    NumericName(String),

    #[error("label id out of range: {0}")]
    IdOutOfRange(String),
}

/// A single entry of a note form's label list.
///
/// Forms send existing labels by id and new labels by name, mixed in one
/// list. A token is an id iff it is non-empty and made only of ASCII digits;
/// anything else names a label to find or create.
///
/// # Examples
///
/// ```
/// use memo::domain::{LabelId, LabelRef};
///
/// assert_eq!(LabelRef::parse("12").unwrap(), LabelRef::Id(LabelId::new(12)));
/// assert_eq!(
///     LabelRef::parse(" new label ").unwrap(),
///     LabelRef::Name("new label".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LabelRef {
    Id(LabelId),
    Name(String),
}

impl LabelRef {
    /// Classifies one raw token.
    pub fn parse(token: &str) -> Result<Self, ParseLabelRefError> {
        if is_numeric_token(token) {
            return token
                .parse::<i64>()
                .map(|raw| Self::Id(LabelId::new(raw)))
                .map_err(|_| ParseLabelRefError::IdOutOfRange(token.to_string()));
        }

        let name = token.trim();
        if name.is_empty() {
            return Err(ParseLabelRefError::Empty);
        }
        if name.chars().count() > MAX_LABEL_NAME_LEN {
            return Err(ParseLabelRefError::TooLong);
        }
        // " 12 " trims to something that can never be referenced by name again
        if is_numeric_token(name) {
            return Err(ParseLabelRefError::NumericName(name.to_string()));
        }

        Ok(Self::Name(name.to_string()))
    }

    /// Returns the token form of this reference, as a form would send it.
    pub fn to_token(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Name(name) => name.clone(),
        }
    }
}

fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
