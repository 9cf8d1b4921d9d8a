//! Board and catalog listing service.
//!
//! The `data` feature exposes the search core and the Diesel repository;
//! `server` adds the Actix-web JSON API on top.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod search;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::{ConnectionOptions, establish_connection_pool};
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::comments::{
        list_comments, modify_comment, read_comment, register_comment, remove_comment,
    };
    use crate::routes::documents::{
        list_documents, list_documents_with_all, list_documents_with_comment_count,
        modify_document, read_document, register_document, remove_document,
    };
    use crate::routes::items::{list_items, modify_item, read_item, register_item, remove_item};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let options = ConnectionOptions::from_config(&server_config);
        let pool = establish_connection_pool(&server_config.database_url, &options).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool).with_batch_size(server_config.batch_size);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Listening on {}:{} (batch size {}, page size {})",
            bind_address.0,
            bind_address.1,
            repo.batch_size(),
            server_config.default_page_size
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(
                    web::scope("/api")
                        // Literal paths before `{document_id}`.
                        .service(list_documents_with_comment_count)
                        .service(list_documents_with_all)
                        .service(list_documents)
                        .service(register_document)
                        .service(read_document)
                        .service(modify_document)
                        .service(remove_document)
                        .service(list_comments)
                        .service(register_comment)
                        .service(read_comment)
                        .service(modify_comment)
                        .service(remove_comment)
                        .service(list_items)
                        .service(register_item)
                        .service(read_item)
                        .service(modify_item)
                        .service(remove_item),
                )
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
