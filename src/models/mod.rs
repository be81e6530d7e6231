//! Data models for the book loader

pub mod author;
pub mod book;
pub mod book_author;
pub mod import_summary;

// Re-export commonly used types
pub use author::Author;
pub use book::{BookRow, NewBook};
pub use book_author::BookAuthor;
pub use import_summary::{AbortReason, ImportSummary};
