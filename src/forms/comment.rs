use serde::Deserialize;
use validator::Validate;

use crate::domain::comment::NewComment;
use crate::domain::types::{DocumentId, WriterName};
use crate::forms::FormError;

/// Body of the comment register endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentForm {
    pub document_id: i32,
    #[validate(length(min = 1))]
    pub text: String,
    #[validate(length(min = 1, max = 50))]
    pub replyer: String,
}

/// Body of the comment modify endpoint; only the text changes.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentTextForm {
    #[validate(length(min = 1))]
    pub text: String,
}

impl TryFrom<CommentForm> for NewComment {
    type Error = FormError;

    fn try_from(form: CommentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewComment::new(
            DocumentId::new(form.document_id).map_err(|_| FormError::InvalidDocumentId)?,
            form.text.trim().to_string(),
            WriterName::new(form.replyer).map_err(|_| FormError::InvalidWriter)?,
        ))
    }
}

impl CommentTextForm {
    pub fn into_text(self) -> Result<String, FormError> {
        self.validate()?;
        Ok(self.text.trim().to_string())
    }
}
