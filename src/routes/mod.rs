//! JSON endpoints mounted under `/api`.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod comments;
pub mod documents;
pub mod items;

/// Body returned by register endpoints.
#[derive(Serialize)]
pub struct Created {
    pub id: i32,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps a service failure onto a status code; store failures are logged
/// and hidden from the client.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(message)
        | ServiceError::TypeConstraint(message)
        | ServiceError::InvalidPagination(message) => {
            HttpResponse::BadRequest().json(ErrorBody { error: message })
        }
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(ErrorBody { error: message })
        }
        ServiceError::Repository(err) => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
