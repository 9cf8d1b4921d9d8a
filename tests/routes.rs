use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use board_catalog::models::config::ServerConfig;
use board_catalog::repository::DieselRepository;
use board_catalog::routes::comments::{list_comments, register_comment};
use board_catalog::routes::documents::{
    list_documents, list_documents_with_all, read_document, register_document, remove_document,
};
use board_catalog::routes::items::{list_items, register_item};

mod common;

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        batch_size: 20,
        default_page_size: 10,
        pool_size: 1,
        wal: true,
        busy_timeout_ms: 1_000,
    }
}

macro_rules! api {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .service(
                    web::scope("/api")
                        .service(list_documents_with_all)
                        .service(list_documents)
                        .service(register_document)
                        .service(read_document)
                        .service(remove_document)
                        .service(list_comments)
                        .service(register_comment)
                        .service(list_items)
                        .service(register_item),
                )
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .app_data(web::Data::new(server_config())),
        )
        .await
    };
}

#[actix_web::test]
async fn empty_listing_is_all_zero() {
    let test_db = common::TestDb::new("test_routes_empty.db");
    let app = api!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/documents?page=3&size=10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "page": 0, "size": 0, "total": 0, "start": 0, "end": 0,
            "prev": false, "next": false, "dtoList": []
        })
    );
}

#[actix_web::test]
async fn registered_document_is_listed_with_wire_file_names() {
    let test_db = common::TestDb::new("test_routes_documents.db");
    let app = api!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({
            "title": "Weekly notes",
            "content": "Agenda for monday",
            "writer": "alice",
            "file_names": ["tok1_agenda.pdf", "tok2_minutes.pdf"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::post()
        .uri("/api/comments")
        .set_json(json!({ "document_id": id, "text": "noted", "replyer": "bob" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::get()
        .uri("/api/documents?type=t&keyword=Weekly")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(
        body["dtoList"][0]["file_names"],
        json!(["tok1_agenda.pdf", "tok2_minutes.pdf"])
    );

    let req = test::TestRequest::get().uri("/api/documents/all").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["dtoList"][0]["comment_count"], 1);
    assert_eq!(body["dtoList"][0]["attachments"][1]["ord"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/documents/{id}/comments"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["dtoList"][0]["text"], "noted");
}

#[actix_web::test]
async fn invalid_form_is_a_bad_request() {
    let test_db = common::TestDb::new("test_routes_invalid.db");
    let app = api!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({ "title": "Hi", "content": "x", "writer": "alice" }))
        .to_request();

    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn missing_document_is_not_found() {
    let test_db = common::TestDb::new("test_routes_missing.db");
    let app = api!(test_db);

    let req = test::TestRequest::get().uri("/api/documents/41").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::delete().uri("/api/documents/41").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn items_filter_by_sell_status() {
    let test_db = common::TestDb::new("test_routes_items.db");
    let app = api!(test_db);

    for (name, status) in [("Lamp", "SELL"), ("Chair", "SOLD_OUT")] {
        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(json!({
                "name": name,
                "price": 100,
                "stock_number": 1,
                "detail": "furniture",
                "sell_status": status,
                "file_names": [format!("{}_front.jpg", name.to_lowercase())]
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/items?type=s&keyword=SOLD_OUT")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["dtoList"][0]["name"], "Chair");
    assert_eq!(body["dtoList"][0]["sell_status"], "SOLD_OUT");
}

fn document_body(title: &str, file_names: &[&str]) -> Value {
    json!({
        "title": title,
        "content": "Agenda for monday",
        "writer": "alice",
        "file_names": file_names
    })
}

#[actix_web::test]
async fn token_listed_twice_is_a_bad_request() {
    let test_db = common::TestDb::new("test_routes_duplicate_token.db");
    let app = api!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .set_json(document_body("Weekly notes", &["a_x.png", "a_y.png"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().expect("message").contains("'a'"));
}

#[actix_web::test]
async fn token_owned_by_another_document_conflicts() {
    let test_db = common::TestDb::new("test_routes_reused_token.db");
    let app = api!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .set_json(document_body("Weekly notes", &["tok_agenda.pdf"]))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .set_json(document_body("Monthly notes", &["tok_minutes.pdf"]))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );

    // The failed insert rolled back, so only the first document exists.
    let req = test::TestRequest::get().uri("/api/documents").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
}

#[actix_web::test]
async fn comment_for_missing_document_conflicts() {
    let test_db = common::TestDb::new("test_routes_orphan_comment.db");
    let app = api!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/comments")
        .set_json(json!({ "document_id": 999, "text": "hello?", "replyer": "bob" }))
        .to_request();

    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );
}

#[actix_web::test]
async fn page_past_last_block_keeps_requested_block() {
    let test_db = common::TestDb::new("test_routes_far_page.db");
    let app = api!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .set_json(document_body("Weekly notes", &[]))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::get()
        .uri("/api/documents?page=11&size=10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["page"], 11);
    assert_eq!(body["start"], 11);
    assert_eq!(body["end"], 1);
    assert_eq!(body["prev"], true);
    assert_eq!(body["next"], false);
    assert_eq!(body["dtoList"], json!([]));
}
