use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::attachment::{Attachment, NewAttachment};
use crate::domain::types::{DocumentId, Title, WriterName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub title: Title,
    pub content: String,
    pub writer: WriterName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Document together with its comment count and attachments, as produced by
/// the aggregate listing.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAggregate {
    pub document: Document,
    pub comment_count: i64,
    pub attachments: Vec<Attachment>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDocument {
    pub title: Title,
    pub content: String,
    pub writer: WriterName,
    /// Attachments in display order.
    pub attachments: Vec<NewAttachment>,
}

impl NewDocument {
    #[must_use]
    pub fn new(
        title: Title,
        content: String,
        writer: WriterName,
        attachments: Vec<NewAttachment>,
    ) -> Self {
        Self {
            title,
            content: content.trim().to_string(),
            writer,
            attachments,
        }
    }
}

/// Replacement values for an existing document. The attachment list
/// replaces the stored one entirely.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateDocument {
    pub title: Title,
    pub content: String,
    pub attachments: Vec<NewAttachment>,
}

impl UpdateDocument {
    #[must_use]
    pub fn new(title: Title, content: String, attachments: Vec<NewAttachment>) -> Self {
        Self {
            title,
            content: content.trim().to_string(),
            attachments,
        }
    }
}
