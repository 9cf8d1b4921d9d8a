use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::document::{
    Document as DomainDocument, NewDocument as DomainNewDocument,
    UpdateDocument as DomainUpdateDocument,
};
use crate::domain::types::{DocumentId, Title, TypeConstraintError, WriterName};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::documents)]
/// Diesel model for [`crate::domain::document::Document`].
pub struct Document {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::documents)]
/// Insertable form of [`Document`].
pub struct NewDocument<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub writer: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::documents)]
/// Data used when updating a [`Document`] record.
pub struct UpdateDocument<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Document> for DomainDocument {
    type Error = TypeConstraintError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DocumentId::new(document.id)?,
            title: Title::new(document.title)?,
            content: document.content,
            writer: WriterName::new(document.writer)?,
            created_at: document.created_at,
            updated_at: document.updated_at,
        })
    }
}

impl<'a> NewDocument<'a> {
    pub fn from_domain(document: &'a DomainNewDocument, now: NaiveDateTime) -> Self {
        Self {
            title: document.title.as_str(),
            content: document.content.as_str(),
            writer: document.writer.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateDocument<'a> {
    pub fn from_domain(document: &'a DomainUpdateDocument, now: NaiveDateTime) -> Self {
        Self {
            title: document.title.as_str(),
            content: document.content.as_str(),
            updated_at: now,
        }
    }
}
