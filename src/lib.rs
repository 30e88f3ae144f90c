//! Bookshelf - Personal Library Manager
//!
//! Tracks title, author, year, genre and read status of a small personal
//! library stored in a single JSON file. The same store is driven from an
//! interactive console menu, a form-based web interface and a JSON API.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub templates: Arc<web::Templates>,
}

impl AppState {
    /// Load the library and build every service for this configuration
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let repository = repository::Repository::new(&config.library);
        let services = services::Services::new(repository).await?;

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
            templates: Arc::new(web::Templates::new()?),
        })
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = DefaultBodyLimit::max(state.config.library.max_upload_bytes);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(web::routes())
        .nest("/api/v1", api::routes())
        .with_state(state)
        .merge(openapi)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
