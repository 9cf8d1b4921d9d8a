use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CommentDto {
    pub id: i32,
    pub document_id: i32,
    pub text: String,
    pub replyer: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
