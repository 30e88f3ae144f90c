//! Form-based web interface
//!
//! A sidebar with one page per library operation, rendered server-side.

pub mod pages;
pub mod templates;

use axum::{
    routing::get,
    Router,
};

use crate::AppState;

pub use templates::Templates;

/// Routes of the form interface
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/add", get(pages::add_form).post(pages::add_submit))
        .route("/remove", get(pages::remove_form).post(pages::remove_submit))
        .route("/search", get(pages::search))
        .route("/books", get(pages::list_books))
        .route("/books/:index/read", get(pages::read_book))
        .route("/stats", get(pages::stats))
        .route("/exit", get(pages::exit))
}
