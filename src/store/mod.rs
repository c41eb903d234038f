//! In-memory book store.
//!
//! The store is the sole unit of mutation: validation, duplicate detection
//! and CRUD all happen here, under one lock held by the calling handler.
//! Lookups and the duplicate check are linear scans; the collection is
//! expected to stay small.

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload, BookQuery, UpdateBook},
};

/// Ordered collection of books plus the monotonic id counter.
///
/// Ids are never reused: the counter only ever increments, including across
/// deletes.
#[derive(Debug, Clone)]
pub struct BookStore {
    books: Vec<Book>,
    next_id: u64,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl BookStore {
    /// Empty store, first assigned id is 1.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-populated with the 3 seed records; the counter starts at 4.
    pub fn seeded() -> Self {
        let books = vec![
            Book {
                id: 1,
                title: "The Great Gatsby".to_string(),
                author: "F. Scott Fitzgerald".to_string(),
            },
            Book {
                id: 2,
                title: "To Kill a Mockingbird".to_string(),
                author: "Harper Lee".to_string(),
            },
            Book {
                id: 3,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
            },
        ];
        Self { books, next_id: 4 }
    }

    /// List books, optionally filtered by case-insensitive substring match
    /// on author and/or title. Never errors.
    pub fn list(&self, query: &BookQuery) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| {
                query
                    .author
                    .as_deref()
                    .map_or(true, |a| contains_ci(&book.author, a))
            })
            .filter(|book| {
                query
                    .title
                    .as_deref()
                    .map_or(true, |t| contains_ci(&book.title, t))
            })
            .cloned()
            .collect()
    }

    /// Get a book by id.
    pub fn get(&self, id: u64) -> AppResult<Book> {
        self.find(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No book exists with ID {}", id)))
    }

    /// Create a new book: validate, reject duplicates, assign the next id
    /// and append to the collection.
    pub fn create(&mut self, payload: &BookPayload) -> AppResult<Book> {
        let (title, author) = validate_payload(payload)?;

        let duplicate = self
            .books
            .iter()
            .any(|b| eq_ci(&b.title, &title) && eq_ci(&b.author, &author));
        if duplicate {
            return Err(AppError::Conflict(
                "This book already exists in the collection".to_string(),
            ));
        }

        let book = Book {
            id: self.allocate_id(),
            title,
            author,
        };
        tracing::info!("Created book id={} \"{}\"", book.id, book.title);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Replace title and author of an existing book. The id is unchanged.
    /// Existence is checked before the body is validated, and there is no
    /// duplicate check on update.
    pub fn replace(&mut self, id: u64, payload: &BookPayload) -> AppResult<Book> {
        let index = self.books.iter().position(|b| b.id == id).ok_or_else(|| {
            AppError::NotFound(format!("Cannot update - no book exists with ID {}", id))
        })?;

        let (title, author) = validate_payload(payload)?;

        let book = &mut self.books[index];
        book.title = title;
        book.author = author;
        Ok(book.clone())
    }

    /// Apply a partial update. A field that is absent, or present but empty
    /// after trimming, is left unchanged; this never fails once the id is
    /// found.
    pub fn update_partial(&mut self, id: u64, updates: &UpdateBook) -> AppResult<Book> {
        let book = self.find_mut(id).ok_or_else(|| {
            AppError::NotFound(format!("Cannot update - no book exists with ID {}", id))
        })?;

        if let Some(title) = non_empty(updates.title.as_deref()) {
            book.title = title;
        }
        if let Some(author) = non_empty(updates.author.as_deref()) {
            book.author = author;
        }
        Ok(book.clone())
    }

    /// Remove a book, preserving the order of the remaining records.
    pub fn delete(&mut self, id: u64) -> AppResult<Book> {
        let index = self.books.iter().position(|b| b.id == id).ok_or_else(|| {
            AppError::NotFound(format!("Cannot delete - no book exists with ID {}", id))
        })?;
        let removed = self.books.remove(index);
        tracing::info!("Deleted book id={} \"{}\"", removed.id, removed.title);
        Ok(removed)
    }

    fn find(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Check both fields of a create/replace body, collecting every violation
/// rather than stopping at the first. Returns the trimmed values.
fn validate_payload(payload: &BookPayload) -> AppResult<(String, String)> {
    let mut errors = Vec::new();

    let title = payload.title.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() {
        errors.push("Title is required and cannot be empty".to_string());
    }

    let author = payload.author.as_deref().map(str::trim).unwrap_or("");
    if author.is_empty() {
        errors.push("Author is required and cannot be empty".to_string());
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok((title.to_string(), author.to_string()))
}

/// Trimmed value of a PATCH field, or None when absent or blank.
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
