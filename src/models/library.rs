//! In-memory library: an ordered sequence of books.
//!
//! All operations here are pure; persistence is handled by
//! [`crate::repository::library::LibraryRepository`].

use serde::{Deserialize, Serialize};

use super::book::{Book, LibraryStats};

/// Ordered collection of books, in insertion order.
///
/// Serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book at the end
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove the first book whose title matches, ignoring case.
    ///
    /// Returns `None` and leaves the library untouched when nothing matches.
    pub fn remove_by_title(&mut self, title: &str) -> Option<Book> {
        let index = self.books.iter().position(|book| book.has_title(title))?;
        Some(self.books.remove(index))
    }

    /// Books whose title or author contains `query`, ignoring case
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Book> + 'a {
        let query = query.to_lowercase();
        self.books
            .iter()
            .filter(move |book| book.matches_lowercase(&query))
    }

    /// All books in order
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn statistics(&self) -> LibraryStats {
        let read = self.books.iter().filter(|book| book.read).count();
        LibraryStats::new(self.books.len(), read)
    }
}
