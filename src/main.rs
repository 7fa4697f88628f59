use std::sync::Arc;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use video_learning::api;
use video_learning::config::AppConfig;
use video_learning::db::{self, CatalogStore, PgCatalogStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if it exists
    dotenv().ok();

    env_logger::init();

    let config = AppConfig::new().map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let config = Arc::new(config);

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );

    // Cover images are served from here
    tokio::fs::create_dir_all(&config.storage.upload_path).await?;

    let pool = db::create_pool(&config.database.url, config.database.max_connections)
        .map_err(|e| {
            log::error!("Failed to create database pool: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;
    let store: Arc<dyn CatalogStore> = Arc::new(PgCatalogStore::new(pool));

    let c = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(actix_cors::Cors::permissive())
            .service(Files::new("/uploads", &c.storage.upload_path))
            .app_data(web::Data::from(store.clone()))
            .app_data(web::Data::from(c.clone()))
            .configure(api::configure)
    })
    .bind((config.server.host.clone(), config.server.port))?
    .run()
    .await
}
