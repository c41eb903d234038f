//! Data models for the BookStore API

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookDeleted, BookListResponse, BookPayload, BookQuery, BookUpdated, UpdateBook};
