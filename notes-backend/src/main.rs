use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod models;
mod store;

use config::Config;
use store::NoteStore;

pub struct AppState {
    pub store: Arc<NoteStore>,
    pub config: Config,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;
    let bind_addr = config.bind_addr.clone();

    log::info!("Notes API v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(NoteStore::new());
    let started_at = std::time::Instant::now();

    log::info!("Starting server on {}:{}", bind_addr, port);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                config: config.clone(),
                started_at,
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind((bind_addr.as_str(), port))?
    .run();

    let server_handle = server.handle();

    // Ctrl+C handler for graceful shutdown
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
        log::info!("Shutdown complete");
    });

    server.await
}
