//! Request bodies accepted by the write endpoints.

use std::collections::HashSet;

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::attachment::NewAttachment;
use crate::dto::attachment::AttachmentRef;

pub mod comment;
pub mod document;
pub mod item;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid writer")]
    InvalidWriter,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid document id")]
    InvalidDocumentId,

    #[error("invalid attachment '{0}'")]
    InvalidAttachment(String),

    #[error("attachment token '{0}' is listed more than once")]
    DuplicateAttachment(String),
}

/// Parses `token_filename` entries into attachments, keeping list order.
/// Each token may appear once.
fn parse_attachments(file_names: &[String]) -> Result<Vec<NewAttachment>, FormError> {
    let mut seen = HashSet::new();

    file_names
        .iter()
        .map(|wire| {
            let attachment = AttachmentRef::parse(wire)
                .map(NewAttachment::from)
                .map_err(|_| FormError::InvalidAttachment(wire.clone()))?;
            if !seen.insert(attachment.token.clone()) {
                return Err(FormError::DuplicateAttachment(
                    attachment.token.into_inner(),
                ));
            }
            Ok(attachment)
        })
        .collect()
}
