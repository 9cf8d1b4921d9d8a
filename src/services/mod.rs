//! Service layer: request normalization, repository calls and projection.
//!
//! Services are generic over the repository traits so they can run against
//! [`crate::repository::DieselRepository`] or the mockall double.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::SearchQuery;
use crate::repository::errors::RepositoryError;
use crate::search::SearchError;
use crate::search::fields::FieldTable;
use crate::search::request::SearchRequest;

pub mod comments;
pub mod documents;
pub mod items;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("invalid form: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::InvalidPagination(message) => ServiceError::InvalidPagination(message),
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(err.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<SearchError> for ServiceError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidPagination(message) => ServiceError::InvalidPagination(message),
            other => ServiceError::Form(other.to_string()),
        }
    }
}

/// Logs a failed write. Constraint violations come from client input
/// (reused tokens, unknown parents) and are only warned about.
fn log_write_failure(action: &str, err: &RepositoryError) {
    match err {
        RepositoryError::ConstraintViolation(_) => log::warn!("Rejected {action}: {err}"),
        _ => log::error!("Failed to {action}: {err}"),
    }
}

/// Normalizes `request` and turns it into a paged repository query.
fn search_query(
    request: SearchRequest,
    table: &FieldTable,
    default_page_size: usize,
) -> (SearchRequest, SearchQuery) {
    let request = request.normalized(default_page_size);
    let predicate = request.predicate(table);
    log::debug!(
        "{} search page {} size {} with {} condition(s)",
        table.entity(),
        request.page,
        request.size,
        predicate.conditions().len()
    );
    let query = SearchQuery::new(predicate).paginate(request.page, request.size);
    (request, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_violations_become_conflicts() {
        let err = ServiceError::from(RepositoryError::ConstraintViolation(
            "Unique constraint violation: document_attachments.token".to_string(),
        ));
        assert!(matches!(err, ServiceError::Conflict(message) if message.contains("token")));

        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::DatabaseError("disk I/O error".to_string())),
            ServiceError::Repository(_)
        ));
    }
}
