use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dto::attachment::AttachmentDto;

/// Full document view; attachments in `token_filename` wire form.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DocumentDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub file_names: Vec<String>,
}

/// Listing row with the number of comments.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DocumentCommentCountDto {
    pub id: i32,
    pub title: String,
    pub writer: String,
    pub created_at: NaiveDateTime,
    pub comment_count: i64,
}

/// Listing row with the comment count and ordered attachments.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DocumentListAllDto {
    pub id: i32,
    pub title: String,
    pub writer: String,
    pub created_at: NaiveDateTime,
    pub comment_count: i64,
    pub attachments: Vec<AttachmentDto>,
}
