use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::document::DocumentForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{Created, error_response};
use crate::search::request::SearchRequest;
use crate::services::documents as documents_service;

#[get("/documents")]
pub async fn list_documents(
    params: web::Query<SearchRequest>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match documents_service::list_documents(
        repo.get_ref(),
        params.into_inner(),
        server_config.default_page_size,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list documents"),
    }
}

#[get("/documents/comment-count")]
pub async fn list_documents_with_comment_count(
    params: web::Query<SearchRequest>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match documents_service::list_documents_with_comment_count(
        repo.get_ref(),
        params.into_inner(),
        server_config.default_page_size,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list documents with comment count"),
    }
}

#[get("/documents/all")]
pub async fn list_documents_with_all(
    params: web::Query<SearchRequest>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match documents_service::list_documents_with_all(
        repo.get_ref(),
        params.into_inner(),
        server_config.default_page_size,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list documents with all"),
    }
}

#[get("/documents/{document_id}")]
pub async fn read_document(
    document_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match documents_service::read_document(repo.get_ref(), document_id.into_inner()) {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(err) => error_response(err, "read document"),
    }
}

#[post("/documents")]
pub async fn register_document(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<DocumentForm>,
) -> impl Responder {
    match documents_service::register_document(repo.get_ref(), form) {
        Ok(id) => HttpResponse::Created().json(Created { id }),
        Err(err) => error_response(err, "register document"),
    }
}

#[put("/documents/{document_id}")]
pub async fn modify_document(
    document_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<DocumentForm>,
) -> impl Responder {
    match documents_service::modify_document(repo.get_ref(), document_id.into_inner(), form) {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(err) => error_response(err, "modify document"),
    }
}

#[delete("/documents/{document_id}")]
pub async fn remove_document(
    document_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match documents_service::remove_document(repo.get_ref(), document_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "remove document"),
    }
}
