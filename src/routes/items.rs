use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::item::ItemForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{Created, error_response};
use crate::search::request::SearchRequest;
use crate::services::items as items_service;

#[get("/items")]
pub async fn list_items(
    params: web::Query<SearchRequest>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match items_service::list_items(
        repo.get_ref(),
        params.into_inner(),
        server_config.default_page_size,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list items"),
    }
}

#[get("/items/{item_id}")]
pub async fn read_item(
    item_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match items_service::read_item(repo.get_ref(), item_id.into_inner()) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err, "read item"),
    }
}

#[post("/items")]
pub async fn register_item(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ItemForm>,
) -> impl Responder {
    match items_service::register_item(repo.get_ref(), form) {
        Ok(id) => HttpResponse::Created().json(Created { id }),
        Err(err) => error_response(err, "register item"),
    }
}

#[put("/items/{item_id}")]
pub async fn modify_item(
    item_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ItemForm>,
) -> impl Responder {
    match items_service::modify_item(repo.get_ref(), item_id.into_inner(), form) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err, "modify item"),
    }
}

#[delete("/items/{item_id}")]
pub async fn remove_item(
    item_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match items_service::remove_item(repo.get_ref(), item_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "remove item"),
    }
}
