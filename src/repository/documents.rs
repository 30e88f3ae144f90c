//! Uploaded documents repository

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct DocumentsRepository {
    dir: PathBuf,
}

impl DocumentsRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write a document under the upload directory, keyed by its file name.
    /// An existing file with the same name is replaced.
    pub async fn store(&self, file_name: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        let name = Path::new(file_name)
            .file_name()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("Invalid file name: '{}'", file_name)))?;

        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(name);
        fs::write(&path, bytes).await?;

        tracing::info!("Stored document {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Read a stored document.
    ///
    /// Only files that resolve inside the upload directory are served; anything
    /// else is reported as a missing document.
    pub async fn read(&self, path: &Path) -> AppResult<Vec<u8>> {
        let resolved = self.resolve(path).await?;
        Ok(fs::read(&resolved).await?)
    }

    async fn resolve(&self, path: &Path) -> AppResult<PathBuf> {
        let missing = || AppError::DocumentNotFound(path.display().to_string());
        let dir = canonical(&self.dir).await?.ok_or_else(missing)?;
        let resolved = canonical(path).await?.ok_or_else(missing)?;

        if !resolved.starts_with(&dir) {
            tracing::warn!(
                "Refusing to read {} outside of {}",
                resolved.display(),
                dir.display()
            );
            return Err(missing());
        }
        Ok(resolved)
    }

    /// Remove a stored document; a missing file is not an error
    pub async fn remove(&self, path: &Path) -> AppResult<()> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

async fn canonical(path: &Path) -> AppResult<Option<PathBuf>> {
    match fs::canonicalize(path).await {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
