use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::comment::{Comment as DomainComment, NewComment as DomainNewComment};
use crate::domain::types::{CommentId, DocumentId, TypeConstraintError, WriterName};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::comments)]
/// Diesel model for [`crate::domain::comment::Comment`].
pub struct Comment {
    pub id: i32,
    pub document_id: i32,
    pub text: String,
    pub replyer: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment<'a> {
    pub document_id: i32,
    pub text: &'a str,
    pub replyer: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Comment> for DomainComment {
    type Error = TypeConstraintError;

    fn try_from(comment: Comment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(comment.id)?,
            document_id: DocumentId::new(comment.document_id)?,
            text: comment.text,
            replyer: WriterName::new(comment.replyer)?,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        })
    }
}

impl<'a> NewComment<'a> {
    pub fn from_domain(comment: &'a DomainNewComment, now: NaiveDateTime) -> Self {
        Self {
            document_id: comment.document_id.get(),
            text: comment.text.as_str(),
            replyer: comment.replyer.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}
