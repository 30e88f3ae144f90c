//! JSON API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod stats;

use axum::{
    routing::get,
    Router,
};

use crate::AppState;

/// Routes mounted under `/api/v1`
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .delete(books::delete_book),
        )
        .route("/books/search", get(books::search_books))
        // Statistics
        .route("/stats", get(stats::get_stats))
}
