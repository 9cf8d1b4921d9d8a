//! Converts fetched rows into response DTOs.
//!
//! Pure functions over already-loaded data: children are ordered by their
//! `ord` field, ties broken by token, before they are serialized.

use std::cmp::Ordering;

use crate::domain::attachment::{Attachment, ItemImage, OrderedChild};
use crate::domain::comment::Comment;
use crate::domain::document::{Document, DocumentAggregate};
use crate::domain::item::Item;
use crate::domain::types::{AttachmentToken, FileName};
use crate::dto::attachment::{AttachmentDto, AttachmentRef, ItemImageDto};
use crate::dto::comment::CommentDto;
use crate::dto::document::{DocumentCommentCountDto, DocumentDto, DocumentListAllDto};
use crate::dto::item::ItemDto;

fn child_order<C: OrderedChild>(a: &C, b: &C) -> Ordering {
    a.ord()
        .cmp(&b.ord())
        .then_with(|| a.token().cmp(b.token()))
}

/// Sorts children by display order; deterministic for any input order.
pub fn sort_children<C: OrderedChild>(children: &mut [C]) {
    children.sort_by(child_order);
}

fn wire_name(token: &AttachmentToken, file_name: &FileName) -> String {
    AttachmentRef::new(token.clone(), file_name.clone()).encode()
}

pub fn project_document(document: Document, mut attachments: Vec<Attachment>) -> DocumentDto {
    sort_children(&mut attachments);

    DocumentDto {
        id: document.id.get(),
        title: document.title.into_inner(),
        content: document.content,
        writer: document.writer.into_inner(),
        created_at: document.created_at,
        updated_at: document.updated_at,
        file_names: attachments
            .iter()
            .map(|attachment| wire_name(&attachment.token, &attachment.file_name))
            .collect(),
    }
}

pub fn project_document_with_count(
    document: Document,
    comment_count: i64,
) -> DocumentCommentCountDto {
    DocumentCommentCountDto {
        id: document.id.get(),
        title: document.title.into_inner(),
        writer: document.writer.into_inner(),
        created_at: document.created_at,
        comment_count,
    }
}

pub fn project_document_with_all(aggregate: DocumentAggregate) -> DocumentListAllDto {
    let DocumentAggregate {
        document,
        comment_count,
        mut attachments,
    } = aggregate;
    sort_children(&mut attachments);

    DocumentListAllDto {
        id: document.id.get(),
        title: document.title.into_inner(),
        writer: document.writer.into_inner(),
        created_at: document.created_at,
        comment_count,
        attachments: attachments
            .into_iter()
            .map(|attachment| AttachmentDto {
                token: attachment.token.into_inner(),
                file_name: attachment.file_name.into_inner(),
                ord: attachment.ord,
            })
            .collect(),
    }
}

pub fn project_item(item: Item, mut images: Vec<ItemImage>) -> ItemDto {
    sort_children(&mut images);

    let file_names = images
        .iter()
        .map(|image| wire_name(&image.token, &image.file_name))
        .collect();

    ItemDto {
        id: item.id.get(),
        name: item.name.into_inner(),
        price: item.price,
        stock_number: item.stock_number,
        detail: item.detail,
        sell_status: item.sell_status,
        created_at: item.created_at,
        updated_at: item.updated_at,
        file_names,
        images: images
            .into_iter()
            .map(|image| ItemImageDto {
                token: image.token.into_inner(),
                file_name: image.file_name.into_inner(),
                is_primary: image.is_primary,
                ord: image.ord,
            })
            .collect(),
    }
}

pub fn project_comment(comment: Comment) -> CommentDto {
    CommentDto {
        id: comment.id.get(),
        document_id: comment.document_id.get(),
        text: comment.text,
        replyer: comment.replyer.into_inner(),
        created_at: comment.created_at,
        updated_at: comment.updated_at,
    }
}
