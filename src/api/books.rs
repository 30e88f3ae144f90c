//! Book endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput, BookQuery, NewBook, RemoveQuery},
    AppState,
};

/// List all books in insertion order
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.library.list_all().await)
}

/// Add a book at the end of the library
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(input): Json<BookInput>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = NewBook::from(input).into_book(None)?;
    let created = state.services.library.add(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Remove the first book with the given title (case-insensitive)
#[utoipa::path(
    delete,
    path = "/books",
    tag = "books",
    params(RemoveQuery),
    responses(
        (status = 204, description = "Book removed"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Query(query): Query<RemoveQuery>,
) -> AppResult<StatusCode> {
    match state.services.library.remove(&query.title).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("Book '{}' not found", query.title))),
    }
}

/// Search books by title or author (case-insensitive substring)
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> Json<Vec<Book>> {
    Json(state.services.library.search(&query.q).await)
}
