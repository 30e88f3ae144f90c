//! Form interface page handlers

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Multipart;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{book::parse_year, Book, InlineDocument, NewBook},
    AppState,
};

use super::templates::Message;

#[derive(Serialize)]
struct SimplePage {
    heading: &'static str,
    message: Option<Message>,
}

#[derive(Serialize)]
struct BookRow {
    index: usize,
    line: String,
    has_document: bool,
}

impl BookRow {
    fn new(index: usize, book: &Book) -> Self {
        Self {
            index,
            line: book.to_string(),
            has_document: book.file_path.is_some(),
        }
    }
}

#[derive(Serialize)]
struct BooksPage {
    heading: &'static str,
    message: Option<Message>,
    has_books: bool,
    books: Vec<BookRow>,
}

#[derive(Serialize)]
struct SearchPage {
    heading: &'static str,
    message: Option<Message>,
    query: String,
    searched: bool,
    has_books: bool,
    books: Vec<BookRow>,
}

#[derive(Serialize)]
struct StatsPage {
    heading: &'static str,
    message: Option<Message>,
    total: usize,
    read_percentage: String,
}

#[derive(Serialize)]
struct ReadPage {
    heading: &'static str,
    message: Option<Message>,
    book_line: String,
    is_pdf: bool,
    pdf_uri: String,
    text: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub title: String,
}

/// Uploaded file taken from the add form
struct Upload {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Render an error as a message page
fn error_page(state: &AppState, err: AppError) -> Response {
    let (status, _) = err.status();
    let page = SimplePage {
        heading: "Error",
        message: Some(Message::error(err.public_message())),
    };
    match state.templates.render("message", page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn rows(books: &[Book]) -> Vec<BookRow> {
    books
        .iter()
        .enumerate()
        .map(|(i, book)| BookRow::new(i, book))
        .collect()
}

fn render<S: Serialize>(state: &AppState, name: &str, page: S) -> AppResult<(StatusCode, String)> {
    Ok((StatusCode::OK, state.templates.render(name, page)?))
}

fn respond(state: &AppState, result: AppResult<(StatusCode, String)>) -> Response {
    match result {
        Ok((status, html)) => (status, Html(html)).into_response(),
        Err(err) => error_page(state, err),
    }
}

pub async fn index() -> Redirect {
    Redirect::to("/books")
}

pub async fn add_form(State(state): State<AppState>) -> Response {
    let page = SimplePage {
        heading: "Add a Book",
        message: None,
    };
    respond(&state, render(&state, "add", page))
}

pub async fn add_submit(State(state): State<AppState>, multipart: Multipart) -> Response {
    let message = match add_book(&state, multipart).await {
        Ok(book) => Ok((
            StatusCode::OK,
            Message::success(format!("Book '{}' added successfully!", book.title)),
        )),
        Err(err @ (AppError::Validation(_) | AppError::UnsupportedMedia(_))) => {
            Ok((err.status().0, Message::error(err.public_message())))
        }
        Err(err) => Err(err),
    };

    let result = message.and_then(|(status, message)| {
        let page = SimplePage {
            heading: "Add a Book",
            message: Some(message),
        };
        let (_, html) = render(&state, "add", page)?;
        Ok((status, html))
    });
    respond(&state, result)
}

async fn add_book(state: &AppState, mut multipart: Multipart) -> AppResult<Book> {
    let mut new_book = NewBook::default();
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => new_book.title = field.text().await?,
            "author" => new_book.author = field.text().await?,
            "year" => new_book.year = field.text().await?,
            "genre" => new_book.genre = field.text().await?,
            "read" => {
                let value = field.text().await?.trim().to_lowercase();
                new_book.read = matches!(value.as_str(), "yes" | "on" | "true");
            }
            "document" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    upload = Some(Upload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            other => tracing::debug!("Ignoring unknown form field '{}'", other),
        }
    }

    // nothing is written when the year is invalid
    parse_year(&new_book.year)?;

    let file_path = match upload {
        Some(upload) => Some(
            state
                .services
                .documents
                .store_upload(&upload.file_name, upload.content_type.as_deref(), &upload.bytes)
                .await?,
        ),
        None => None,
    };

    let book = new_book.into_book(file_path.clone())?;
    match state.services.library.add(book).await {
        Ok(book) => Ok(book),
        Err(err) => {
            if let Some(path) = &file_path {
                state.services.documents.discard(path).await;
            }
            Err(err)
        }
    }
}

pub async fn remove_form(State(state): State<AppState>) -> Response {
    let page = SimplePage {
        heading: "Remove a Book",
        message: None,
    };
    respond(&state, render(&state, "remove", page))
}

pub async fn remove_submit(State(state): State<AppState>, Form(form): Form<RemoveForm>) -> Response {
    let result = remove_page(&state, &form.title).await;
    respond(&state, result)
}

async fn remove_page(state: &AppState, title: &str) -> AppResult<(StatusCode, String)> {
    let message = match state.services.library.remove(title).await? {
        Some(book) => Message::success(format!("Book '{}' removed successfully!", book.title)),
        None => Message::info("Book not found."),
    };
    let page = SimplePage {
        heading: "Remove a Book",
        message: Some(message),
    };
    render(state, "remove", page)
}

pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let books = match &params.q {
        Some(query) => state.services.library.search(query).await,
        None => Vec::new(),
    };
    let page = SearchPage {
        heading: "Search for a Book",
        message: None,
        searched: params.q.is_some(),
        query: params.q.unwrap_or_default(),
        has_books: !books.is_empty(),
        books: rows(&books),
    };
    respond(&state, render(&state, "search", page))
}

pub async fn list_books(State(state): State<AppState>) -> Response {
    let books = state.services.library.list_all().await;
    let page = BooksPage {
        heading: "Your Library",
        message: None,
        has_books: !books.is_empty(),
        books: rows(&books),
    };
    respond(&state, render(&state, "books", page))
}

pub async fn read_book(State(state): State<AppState>, Path(index): Path<usize>) -> Response {
    let result = read_page(&state, index).await;
    respond(&state, result)
}

async fn read_page(state: &AppState, index: usize) -> AppResult<(StatusCode, String)> {
    let book = state
        .services
        .library
        .get(index)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No book at position {}", index)))?;
    let file_path = book.file_path.as_deref().ok_or_else(|| {
        AppError::DocumentNotFound(format!("No document attached to '{}'", book.title))
    })?;

    let (is_pdf, pdf_uri, text) = match state.services.documents.open(file_path).await? {
        InlineDocument::Pdf { data_uri } => (true, data_uri, String::new()),
        InlineDocument::Text { content } => (false, String::new(), content),
    };
    let page = ReadPage {
        heading: "Read Now",
        message: None,
        book_line: book.to_string(),
        is_pdf,
        pdf_uri,
        text,
    };
    render(state, "read", page)
}

pub async fn stats(State(state): State<AppState>) -> Response {
    let stats = state.services.library.statistics().await;
    let page = StatsPage {
        heading: "Library Statistics",
        message: None,
        total: stats.total,
        read_percentage: stats.percentage_label(),
    };
    respond(&state, render(&state, "stats", page))
}

pub async fn exit(State(state): State<AppState>) -> Response {
    let result = exit_page(&state).await;
    respond(&state, result)
}

async fn exit_page(state: &AppState) -> AppResult<(StatusCode, String)> {
    state.services.library.save().await?;
    let page = SimplePage {
        heading: "Exit",
        message: Some(Message::success("Library saved to file. Goodbye!")),
    };
    render(state, "message", page)
}
