use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CommentId, DocumentId, WriterName};

/// Reply left under a document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub document_id: DocumentId,
    pub text: String,
    pub replyer: WriterName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewComment {
    pub document_id: DocumentId,
    pub text: String,
    pub replyer: WriterName,
}

impl NewComment {
    #[must_use]
    pub fn new(document_id: DocumentId, text: String, replyer: WriterName) -> Self {
        Self {
            document_id,
            text: text.trim().to_string(),
            replyer,
        }
    }
}
