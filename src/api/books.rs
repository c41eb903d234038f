//! Book collection endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::{Book, BookDeleted, BookListResponse, BookPayload, BookQuery, BookUpdated, UpdateBook},
    AppState,
};

/// List books with optional author/title filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books matching the filters", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> Json<BookListResponse> {
    let books = state.store.lock().await.list(&query);

    Json(BookListResponse {
        count: books.len(),
        books,
    })
}

/// Get a single book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Book>> {
    let book = state.store.lock().await.get(id)?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Duplicate book", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.store.lock().await.create(&payload)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a book's title and author
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = BookUpdated),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn replace_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<BookUpdated>> {
    let book = state.store.lock().await.replace(id, &payload)?;

    Ok(Json(BookUpdated {
        message: "Book updated successfully".to_string(),
        book,
    }))
}

/// Partially update a book (absent or empty fields are left unchanged)
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book partially updated", body = BookUpdated),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn patch_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(updates): Json<UpdateBook>,
) -> AppResult<Json<BookUpdated>> {
    let book = state.store.lock().await.update_partial(id, &updates)?;

    Ok(Json(BookUpdated {
        message: "Book partially updated".to_string(),
        book,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = BookDeleted),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<BookDeleted>> {
    let deleted_book = state.store.lock().await.delete(id)?;

    Ok(Json(BookDeleted {
        message: "Book deleted successfully".to_string(),
        deleted_book,
    }))
}
