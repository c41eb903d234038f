//! Book model and related request/response types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A single book record in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier, immutable once assigned
    pub id: u64,
    /// Book title, stored trimmed
    pub title: String,
    /// Author name, stored trimmed
    pub author: String,
}

/// Body for POST /books and PUT /books/:id.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation detail rather than rejected by the deserializer.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Body for PATCH /books/:id. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Query parameters for GET /books (case-insensitive substring filters).
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    pub author: Option<String>,
    pub title: Option<String>,
}

/// Response for GET /books.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookListResponse {
    /// Number of books after filtering
    pub count: usize,
    pub books: Vec<Book>,
}

/// Response for PUT and PATCH /books/:id.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookUpdated {
    pub message: String,
    pub book: Book,
}

/// Response for DELETE /books/:id.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookDeleted {
    pub message: String,
    #[serde(rename = "deletedBook")]
    pub deleted_book: Book,
}
