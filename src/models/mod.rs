//! Data models for Bookshelf

pub mod book;
pub mod document;
pub mod library;

// Re-export commonly used types
pub use book::{Book, BookInput, LibraryStats, NewBook};
pub use document::{DocumentKind, InlineDocument};
pub use library::Library;
