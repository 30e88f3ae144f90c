//! Business logic services

pub mod documents;
pub mod library;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub library: library::LibraryService,
    pub documents: documents::DocumentsService,
}

impl Services {
    /// Create all services with the given repository, loading the library file
    pub async fn new(repository: Repository) -> AppResult<Self> {
        Ok(Self {
            library: library::LibraryService::open(repository.clone()).await?,
            documents: documents::DocumentsService::new(repository),
        })
    }
}
