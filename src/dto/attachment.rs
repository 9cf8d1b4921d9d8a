//! Attachment references as exchanged with the web layer.

use serde::Serialize;

use crate::domain::attachment::NewAttachment;
use crate::domain::types::{AttachmentToken, FileName, TypeConstraintError};

/// Separator between the token and the file name in the flat wire form.
pub const WIRE_SEPARATOR: char = '_';

/// Token plus original file name, encoded on the wire as `<token>_<file>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentRef {
    pub token: AttachmentToken,
    pub file_name: FileName,
}

impl AttachmentRef {
    pub fn new(token: AttachmentToken, file_name: FileName) -> Self {
        Self { token, file_name }
    }

    pub fn encode(&self) -> String {
        format!(
            "{}{WIRE_SEPARATOR}{}",
            self.token.as_str(),
            self.file_name.as_str()
        )
    }

    /// Parses the flat wire form.
    ///
    /// The token is everything before the first `_`, the file name runs up
    /// to the next `_`. Underscores inside the original file name are
    /// therefore lost: `tok_my_file.png` parses to file name `my`.
    pub fn parse(wire: &str) -> Result<Self, TypeConstraintError> {
        let mut parts = wire.split(WIRE_SEPARATOR);
        let token = parts.next().unwrap_or_default();
        let file_name = parts.next().ok_or_else(|| {
            TypeConstraintError::InvalidValue(format!("missing file name in '{wire}'"))
        })?;

        Ok(Self {
            token: AttachmentToken::new(token)?,
            file_name: FileName::new(file_name)?,
        })
    }
}

impl From<AttachmentRef> for NewAttachment {
    fn from(value: AttachmentRef) -> Self {
        NewAttachment::new(value.token, value.file_name)
    }
}

/// Attachment entry in aggregate listings.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AttachmentDto {
    pub token: String,
    pub file_name: String,
    pub ord: i32,
}

/// Item image entry with the primary-image flag.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ItemImageDto {
    pub token: String,
    pub file_name: String,
    pub is_primary: bool,
    pub ord: i32,
}
