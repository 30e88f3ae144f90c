//! Library store service
//!
//! Owns the in-memory [`Library`] shared by every front end. Each mutating
//! operation runs load-mutate-save under one lock, so the file on disk always
//! matches memory once the call returns.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    error::AppResult,
    models::{Book, Library, LibraryStats},
    repository::Repository,
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
    library: Arc<Mutex<Library>>,
}

impl LibraryService {
    /// Load the library file and wrap it in a service
    pub async fn open(repository: Repository) -> AppResult<Self> {
        let library = repository.library.load().await?;
        Ok(Self {
            repository,
            library: Arc::new(Mutex::new(library)),
        })
    }

    /// Append a book and persist. Memory is only updated once the save succeeds.
    pub async fn add(&self, book: Book) -> AppResult<Book> {
        let mut library = self.library.lock().await;
        let mut updated = library.clone();
        updated.push(book.clone());
        self.repository.library.save(&updated).await?;
        *library = updated;

        tracing::info!("Added book '{}' by {}", book.title, book.author);
        Ok(book)
    }

    /// Remove the first book with this title (ignoring case) and persist.
    ///
    /// Returns `None` when no book matches; nothing is written in that case.
    pub async fn remove(&self, title: &str) -> AppResult<Option<Book>> {
        let mut library = self.library.lock().await;
        let mut updated = library.clone();
        let Some(removed) = updated.remove_by_title(title) else {
            tracing::debug!("No book titled '{}' to remove", title);
            return Ok(None);
        };
        self.repository.library.save(&updated).await?;
        *library = updated;

        tracing::info!("Removed book '{}'", removed.title);
        Ok(Some(removed))
    }

    /// Books whose title or author contains `query`, ignoring case
    pub async fn search(&self, query: &str) -> Vec<Book> {
        let library = self.library.lock().await;
        library.search(query).cloned().collect()
    }

    /// Snapshot of all books in order
    pub async fn list_all(&self) -> Vec<Book> {
        self.library.lock().await.iter().cloned().collect()
    }

    /// Book at a position in the list
    pub async fn get(&self, index: usize) -> Option<Book> {
        self.library.lock().await.get(index).cloned()
    }

    pub async fn statistics(&self) -> LibraryStats {
        self.library.lock().await.statistics()
    }

    /// Write the current library back to disk
    pub async fn save(&self) -> AppResult<()> {
        let library = self.library.lock().await;
        self.repository.library.save(&library).await
    }
}
