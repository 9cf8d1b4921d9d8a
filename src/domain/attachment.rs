//! Attachments owned by documents and catalog items.

use serde::{Deserialize, Serialize};

use crate::domain::types::{AttachmentToken, FileName};

/// File attached to a document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub token: AttachmentToken,
    pub file_name: FileName,
    /// Display position within the owning document.
    pub ord: i32,
}

/// Image attached to a catalog item.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemImage {
    pub token: AttachmentToken,
    pub file_name: FileName,
    /// Marks the image shown in listings.
    pub is_primary: bool,
    pub ord: i32,
}

/// Attachment payload before it is bound to a parent; the position in the
/// owning list becomes its `ord`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewAttachment {
    pub token: AttachmentToken,
    pub file_name: FileName,
}

impl NewAttachment {
    #[must_use]
    pub fn new(token: AttachmentToken, file_name: FileName) -> Self {
        Self { token, file_name }
    }
}

/// Child rows that carry an explicit display order.
pub trait OrderedChild {
    fn ord(&self) -> i32;
    fn token(&self) -> &AttachmentToken;
}

impl OrderedChild for Attachment {
    fn ord(&self) -> i32 {
        self.ord
    }

    fn token(&self) -> &AttachmentToken {
        &self.token
    }
}

impl OrderedChild for ItemImage {
    fn ord(&self) -> i32 {
        self.ord
    }

    fn token(&self) -> &AttachmentToken {
        &self.token
    }
}
