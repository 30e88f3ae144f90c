//! Documents that can be attached to a book

use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Detect the kind from a file name extension, then from a MIME type
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("pdf") => return Some(DocumentKind::Pdf),
            Some("txt") => return Some(DocumentKind::PlainText),
            _ => {}
        }

        let mime = content_type?.split(';').next()?.trim().to_lowercase();
        match mime.as_str() {
            "application/pdf" => Some(DocumentKind::Pdf),
            "text/plain" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::PlainText => "text/plain",
        }
    }
}

/// A stored document prepared for display in a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineDocument {
    /// `data:` URI for an embedded PDF viewer
    Pdf { data_uri: String },
    /// Decoded text for a scrollable panel
    Text { content: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(DocumentKind::detect("dune.pdf", None), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::detect("Notes.TXT", None), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::detect("cover.png", Some("image/png")), None);
    }

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect("upload", Some("application/pdf")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect("upload", Some("text/plain; charset=utf-8")),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(DocumentKind::detect("upload", None), None);
    }
}
