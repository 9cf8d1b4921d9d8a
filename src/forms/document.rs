use serde::Deserialize;
use validator::Validate;

use crate::domain::attachment::NewAttachment;
use crate::domain::document::{NewDocument, UpdateDocument};
use crate::domain::types::{Title, WriterName};
use crate::forms::{FormError, parse_attachments};

/// Body of the document register and modify endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct DocumentForm {
    #[validate(length(min = 3, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[validate(length(min = 1, max = 50))]
    pub writer: String,
    /// Attachments as `token_filename`, in display order.
    #[serde(default)]
    pub file_names: Vec<String>,
}

/// Validated document values.
pub struct DocumentPayload {
    pub title: Title,
    pub content: String,
    pub writer: WriterName,
    pub attachments: Vec<NewAttachment>,
}

impl TryFrom<DocumentForm> for DocumentPayload {
    type Error = FormError;

    fn try_from(form: DocumentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let content = form.content.trim().to_string();
        if content.is_empty() {
            return Err(FormError::Validation(blank_error("content")));
        }

        Ok(Self {
            title: Title::new(form.title).map_err(|_| FormError::InvalidTitle)?,
            content,
            writer: WriterName::new(form.writer).map_err(|_| FormError::InvalidWriter)?,
            attachments: parse_attachments(&form.file_names)?,
        })
    }
}

impl DocumentPayload {
    pub fn into_new(self) -> NewDocument {
        NewDocument::new(self.title, self.content, self.writer, self.attachments)
    }

    /// The writer is fixed at creation and not part of an update.
    pub fn into_update(self) -> UpdateDocument {
        UpdateDocument::new(self.title, self.content, self.attachments)
    }
}

fn blank_error(field: &'static str) -> validator::ValidationErrors {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, validator::ValidationError::new("blank"));
    errors
}
