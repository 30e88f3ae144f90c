//! Library file repository

use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{error::AppResult, models::Library};

#[derive(Clone)]
pub struct LibraryRepository {
    path: PathBuf,
}

impl LibraryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole library.
    ///
    /// A missing file or content that is not a valid book array yields an
    /// empty library. Other I/O failures are returned.
    pub async fn load(&self) -> AppResult<Library> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Library file {} not found, starting empty", self.path.display());
                return Ok(Library::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Library>(&bytes) {
            Ok(library) => {
                tracing::info!(
                    "Loaded {} book(s) from {}",
                    library.len(),
                    self.path.display()
                );
                Ok(library)
            }
            Err(e) => {
                tracing::warn!(
                    "Library file {} is not valid ({}), starting empty",
                    self.path.display(),
                    e
                );
                Ok(Library::default())
            }
        }
    }

    /// Overwrite the file with the whole library, 4-space indented.
    ///
    /// The write is not atomic.
    pub async fn save(&self, library: &Library) -> AppResult<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        library.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, buf).await?;

        tracing::debug!("Saved {} book(s) to {}", library.len(), self.path.display());
        Ok(())
    }
}
