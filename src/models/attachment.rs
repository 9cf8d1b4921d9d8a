//! Attachment rows for documents and item images.
//!
//! Both tables keep a nullable parent id: a detached row (`NULL` parent) is
//! an orphan and gets removed on the next save of its former owner.

use diesel::prelude::*;

use crate::domain::attachment::{Attachment, ItemImage as DomainItemImage, NewAttachment};
use crate::domain::types::{AttachmentToken, FileName, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::document_attachments)]
pub struct DocumentAttachment {
    pub token: String,
    pub document_id: Option<i32>,
    pub file_name: String,
    pub ord: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::document_attachments)]
pub struct NewDocumentAttachment<'a> {
    pub token: &'a str,
    pub document_id: i32,
    pub file_name: &'a str,
    pub ord: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::item_images)]
pub struct ItemImage {
    pub token: String,
    pub item_id: Option<i32>,
    pub file_name: String,
    pub is_primary: bool,
    pub ord: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::item_images)]
pub struct NewItemImage<'a> {
    pub token: &'a str,
    pub item_id: i32,
    pub file_name: &'a str,
    pub is_primary: bool,
    pub ord: i32,
}

impl TryFrom<DocumentAttachment> for Attachment {
    type Error = TypeConstraintError;

    fn try_from(row: DocumentAttachment) -> Result<Self, Self::Error> {
        Ok(Self {
            token: AttachmentToken::new(row.token)?,
            file_name: FileName::new(row.file_name)?,
            ord: row.ord,
        })
    }
}

impl TryFrom<ItemImage> for DomainItemImage {
    type Error = TypeConstraintError;

    fn try_from(row: ItemImage) -> Result<Self, Self::Error> {
        Ok(Self {
            token: AttachmentToken::new(row.token)?,
            file_name: FileName::new(row.file_name)?,
            is_primary: row.is_primary,
            ord: row.ord,
        })
    }
}

/// Rows for `attachments` owned by `document_id`, `ord` following list order.
pub fn document_attachment_rows(
    document_id: i32,
    attachments: &[NewAttachment],
) -> Vec<NewDocumentAttachment<'_>> {
    attachments
        .iter()
        .enumerate()
        .map(|(ord, attachment)| NewDocumentAttachment {
            token: attachment.token.as_str(),
            document_id,
            file_name: attachment.file_name.as_str(),
            ord: ord as i32,
        })
        .collect()
}

/// Rows for `images` owned by `item_id`; the first image is the primary one.
pub fn item_image_rows(item_id: i32, images: &[NewAttachment]) -> Vec<NewItemImage<'_>> {
    images
        .iter()
        .enumerate()
        .map(|(ord, image)| NewItemImage {
            token: image.token.as_str(),
            item_id,
            file_name: image.file_name.as_str(),
            is_primary: ord == 0,
            ord: ord as i32,
        })
        .collect()
}
