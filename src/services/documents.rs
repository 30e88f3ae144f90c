//! Attached documents service

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{DocumentKind, InlineDocument},
    repository::Repository,
};

#[derive(Clone)]
pub struct DocumentsService {
    repository: Repository,
}

impl DocumentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Store an uploaded PDF or plain-text document and return its path
    pub async fn store_upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> AppResult<String> {
        if DocumentKind::detect(file_name, content_type).is_none() {
            return Err(AppError::UnsupportedMedia(format!(
                "'{}' is not a PDF or plain text document",
                file_name
            )));
        }

        let path = self.repository.documents.store(file_name, bytes).await?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Delete a document stored for a book that was never saved
    pub async fn discard(&self, file_path: &str) {
        if let Err(e) = self.repository.documents.remove(Path::new(file_path)).await {
            tracing::warn!("Failed to remove orphaned document {}: {}", file_path, e);
        }
    }

    /// Load a stored document for inline display
    pub async fn open(&self, file_path: &str) -> AppResult<InlineDocument> {
        let kind = DocumentKind::detect(file_path, None).ok_or_else(|| {
            AppError::UnsupportedMedia(format!("Cannot display '{}'", file_path))
        })?;
        let bytes = self.repository.documents.read(Path::new(file_path)).await?;

        Ok(match kind {
            DocumentKind::Pdf => InlineDocument::Pdf {
                data_uri: format!("data:{};base64,{}", kind.mime_type(), STANDARD.encode(&bytes)),
            },
            DocumentKind::PlainText => InlineDocument::Text {
                content: String::from_utf8_lossy(&bytes).into_owned(),
            },
        })
    }
}
