#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the RCCE dashboard.
//!
//! Serves the page catalogue, region list, and per-page render results
//! (map points plus chart data) as JSON, the filtered map points as
//! `GeoJSON`, and the pre-built front end as static files. The dataset is
//! loaded once before the server starts and is shared read-only by every
//! worker.

pub mod config;
mod handlers;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use rcce_dashboard_models::MapSettings;
use rcce_dataset::Dataset;

use crate::config::Config;

/// Shared application state.
pub struct AppState {
    /// The loaded dataset.
    pub dataset: Dataset,
    /// Map centering rules.
    pub map: MapSettings,
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/pages", web::get().to(handlers::pages))
            .route("/regions", web::get().to(handlers::regions))
            .route("/options/{page}", web::get().to(handlers::options))
            .route("/render/{page}", web::get().to(handlers::render))
            .route("/map/{page}", web::get().to(handlers::map))
            .route("/nationwide/{page}", web::get().to(handlers::nationwide)),
    );
}

/// Starts the RCCE dashboard API server.
///
/// This is a regular async function; the caller is responsible for
/// providing the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: Config, dataset: Dataset) -> std::io::Result<()> {
    let state = web::Data::new(AppState {
        dataset,
        map: config.map,
    });

    let bind_addr = config.server.bind_addr;
    let port = config.server.port;
    let static_dir = config.server.static_dir;

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
            // Serve frontend static files (production)
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
