//! Book record model and related types.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// One entry of the personal library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Publication year
    pub year: i32,
    pub genre: String,
    /// Whether the book has been read
    pub read: bool,
    /// Path of an uploaded document attached to this book
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl Book {
    /// Case-insensitive title equality, used for removal
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive substring match against title or author.
    /// `query` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.author.to_lowercase().contains(query)
    }

    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status_label()
        )
    }
}

/// Book as entered in a form: the year is still raw text.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    /// Convert into a [`Book`], parsing the year.
    pub fn into_book(self, file_path: Option<String>) -> AppResult<Book> {
        let year = parse_year(&self.year)?;
        Ok(Book {
            title: self.title,
            author: self.author,
            year,
            genre: self.genre,
            read: self.read,
            file_path,
        })
    }
}

/// Book as posted to the JSON API. Attachments only come from form uploads.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    /// Publication year, as a number or numeric text
    #[schema(value_type = i32)]
    pub year: YearInput,
    pub genre: String,
    #[serde(default)]
    pub read: bool,
}

/// Year as sent by a client, checked by [`parse_year`]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Number(i64),
    Text(String),
}

impl From<BookInput> for NewBook {
    fn from(input: BookInput) -> Self {
        let year = match input.year {
            YearInput::Number(n) => n.to_string(),
            YearInput::Text(text) => text,
        };
        Self {
            title: input.title,
            author: input.author,
            year,
            genre: input.genre,
            read: input.read,
        }
    }
}

/// Parse a publication year typed by a user
pub fn parse_year(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation(format!("Invalid publication year: '{}'", raw.trim())))
}

/// Interpret a yes/no answer; only "yes" (any case) means read
pub fn parse_read_answer(raw: &str) -> bool {
    raw.trim().to_lowercase() == "yes"
}

/// Search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Text searched in title and author
    #[serde(default)]
    pub q: String,
}

/// Removal parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RemoveQuery {
    /// Title of the book to remove (case-insensitive)
    pub title: String,
}

/// Library statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct LibraryStats {
    /// Number of books
    pub total: usize,
    /// Number of books marked read
    pub read: usize,
    /// Percentage of books read, 0 for an empty library
    pub read_percentage: f64,
}

impl LibraryStats {
    pub fn new(total: usize, read: usize) -> Self {
        let read_percentage = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total,
            read,
            read_percentage,
        }
    }

    /// Percentage formatted with two decimals
    pub fn percentage_label(&self) -> String {
        format!("{:.2}", self.read_percentage)
    }
}
