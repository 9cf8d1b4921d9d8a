//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-empty
//! text, well-formed attachment tokens) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Attachment token is empty or contains the wire separator.
    #[error("invalid attachment token")]
    InvalidToken,
    /// Sell status literal is not one of the known values.
    #[error("unknown sell status: {0}")]
    UnknownSellStatus(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(DocumentId, "Unique identifier for a document.");
id_newtype!(ItemId, "Unique identifier for a catalog item.");
id_newtype!(CommentId, "Unique identifier for a document comment.");

/// Macro to generate trimmed, non-empty string wrappers.
macro_rules! text_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Trims the input and rejects empty values.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    Err(TypeConstraintError::EmptyString)
                } else {
                    Ok(Self(trimmed))
                }
            }

            /// Borrow the value as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the owned inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_newtype!(Title, "Document title.");
text_newtype!(WriterName, "Name of a document or comment author.");
text_newtype!(ItemName, "Catalog item name.");
text_newtype!(FileName, "Original file name of an uploaded attachment.");

/// Store token identifying an uploaded file.
///
/// Tokens never contain `_` because the legacy wire form joins the token and
/// the original file name with an underscore.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentToken(String);

impl AttachmentToken {
    /// Validates an existing token.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.is_empty() || value.contains('_') {
            return Err(TypeConstraintError::InvalidToken);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for AttachmentToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AttachmentToken {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<AttachmentToken> for String {
    fn from(value: AttachmentToken) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert!(DocumentId::new(1).is_ok());
        assert_eq!(DocumentId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ItemId::new(-3), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn text_values_are_trimmed() {
        let title = Title::new("  Hello ").expect("valid title");
        assert_eq!(title.as_str(), "Hello");
        assert_eq!(Title::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn tokens_reject_wire_separator() {
        assert!(AttachmentToken::new("abc-123").is_ok());
        assert_eq!(
            AttachmentToken::new("abc_123"),
            Err(TypeConstraintError::InvalidToken)
        );
        assert_eq!(AttachmentToken::new(""), Err(TypeConstraintError::InvalidToken));
    }
}
