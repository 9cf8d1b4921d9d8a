use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::comment::{CommentForm, CommentTextForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{Created, error_response};
use crate::search::request::SearchRequest;
use crate::services::comments as comments_service;

#[get("/documents/{document_id}/comments")]
pub async fn list_comments(
    document_id: web::Path<i32>,
    params: web::Query<SearchRequest>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match comments_service::list_comments(
        repo.get_ref(),
        document_id.into_inner(),
        params.into_inner(),
        server_config.default_page_size,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list comments"),
    }
}

#[get("/comments/{comment_id}")]
pub async fn read_comment(
    comment_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match comments_service::read_comment(repo.get_ref(), comment_id.into_inner()) {
        Ok(comment) => HttpResponse::Ok().json(comment),
        Err(err) => error_response(err, "read comment"),
    }
}

#[post("/comments")]
pub async fn register_comment(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CommentForm>,
) -> impl Responder {
    match comments_service::register_comment(repo.get_ref(), form) {
        Ok(id) => HttpResponse::Created().json(Created { id }),
        Err(err) => error_response(err, "register comment"),
    }
}

#[put("/comments/{comment_id}")]
pub async fn modify_comment(
    comment_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CommentTextForm>,
) -> impl Responder {
    match comments_service::modify_comment(repo.get_ref(), comment_id.into_inner(), form) {
        Ok(comment) => HttpResponse::Ok().json(comment),
        Err(err) => error_response(err, "modify comment"),
    }
}

#[delete("/comments/{comment_id}")]
pub async fn remove_comment(
    comment_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match comments_service::remove_comment(repo.get_ref(), comment_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "remove comment"),
    }
}
