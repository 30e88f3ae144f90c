//! Repository layer for file storage

pub mod documents;
pub mod library;

use crate::config::LibraryConfig;

/// Main repository struct holding the storage locations
#[derive(Clone)]
pub struct Repository {
    pub library: library::LibraryRepository,
    pub documents: documents::DocumentsRepository,
}

impl Repository {
    /// Create a new repository for the configured library file and upload directory
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            library: library::LibraryRepository::new(&config.path),
            documents: documents::DocumentsRepository::new(&config.upload_dir),
        }
    }
}
