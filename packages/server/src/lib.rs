#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the vacancy map application.
//!
//! Serves the search and building-detail REST API for the 3D map
//! frontend from an in-memory index built once at startup from the
//! source `GeoJSON` dataset. User-submitted available-area overrides
//! live in a session-local store; 3D model generation is proxied to the
//! external bridge service.

mod handlers;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use vacancy_map_bridge::BridgeClient;
use vacancy_map_dataset::load_dataset;
use vacancy_map_search::SearchIndex;
use vacancy_map_vacancy::OverrideStore;

/// Number of results returned by the search endpoint.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Shared application state.
pub struct AppState {
    /// Immutable building index; pure reads, no locking.
    pub index: Arc<SearchIndex>,
    /// Session-local available-area overrides.
    pub overrides: Arc<OverrideStore>,
    /// Client for the external model-generation bridge.
    pub bridge: Arc<BridgeClient>,
}

/// Starts the vacancy map API server.
///
/// Loads the building dataset, builds the search index, and starts the
/// Actix-Web HTTP server. This is a regular async function — the caller
/// is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the building dataset cannot be loaded; the server has
/// nothing to serve without it.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_file =
        std::env::var("DATA_FILE").unwrap_or_else(|_| "data/SF_Final.geojson".to_string());

    log::info!("Loading building dataset from {data_file}...");
    let records = load_dataset(Path::new(&data_file)).expect("Failed to load building dataset");

    let index = SearchIndex::new(records);
    log::info!("Indexed {} buildings", index.len());

    let bridge_url =
        std::env::var("BRIDGE_URL").unwrap_or_else(|_| "http://127.0.0.1:8010".to_string());
    log::info!("Using model bridge at {bridge_url}");

    let state = web::Data::new(AppState {
        index: Arc::new(index),
        overrides: Arc::new(OverrideStore::new()),
        bridge: Arc::new(BridgeClient::new(bridge_url)),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .route("/health", web::get().to(handlers::health))
            .route("/search", web::get().to(handlers::search))
            .route("/building", web::get().to(handlers::building))
            .route(
                "/building_by_address",
                web::get().to(handlers::building_by_address),
            )
            .route("/override", web::post().to(handlers::set_override))
            .route("/override", web::delete().to(handlers::clear_override))
            .route(
                "/generate_model",
                web::post().to(handlers::generate_model),
            )
            // Serve the source dataset for the map layer
            .service(Files::new("/data", "data"))
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
