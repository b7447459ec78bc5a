// Books controller - /api/books
//
// Two status codes are deliberately non-standard:
// create answers 200 (not 201) and delete answers 200 even for an unknown id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use super::ValidatedJson;
use crate::entities::{Book, BookPayload, EntityId};
use crate::error::ApiError;
use crate::server::AppState;
use crate::services::BookService;

/// Each path is also served with a trailing slash
pub fn routes() -> Router<AppState> {
    let collection = || get(get_all_books).post(add_book);
    let item = || get(get_book_by_id).put(update_book).delete(delete_book);

    Router::new()
        .route("/api/books", collection())
        .route("/api/books/", collection())
        .route("/api/books/:id", item())
        .route("/api/books/:id/", item())
}

// ============================================================================
// Controller logic (independent of the concrete service)
// ============================================================================

pub fn list_books<S: BookService>(service: &S) -> Json<Vec<Book>> {
    Json(service.list_books())
}

pub fn find_book<S: BookService>(service: &S, id: EntityId) -> Result<Json<Book>, ApiError> {
    match service.get_book(id) {
        Some(book) => Ok(Json(book)),
        None => {
            debug!(book_id = id, "book not found");
            Err(ApiError::NotFound)
        }
    }
}

pub fn create_book<S: BookService>(service: &S, payload: BookPayload) -> Json<Book> {
    let added = service.save_book(payload.into());
    debug!(book_id = added.book_id, "book created");
    Json(added)
}

pub fn replace_book<S: BookService>(
    service: &S,
    id: EntityId,
    payload: BookPayload,
) -> Result<StatusCode, ApiError> {
    match service.update_book(id, payload.into()) {
        Some(_) => {
            debug!(book_id = id, "book updated");
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            debug!(book_id = id, "update of unknown book");
            Err(ApiError::NotFound)
        }
    }
}

pub fn remove_book<S: BookService>(service: &S, id: EntityId) -> StatusCode {
    let deleted = service.delete_book(id);
    debug!(book_id = id, deleted, "book delete requested");
    StatusCode::OK
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/books
async fn get_all_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    list_books(&state.book_service())
}

/// GET /api/books/:id
async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Book>, ApiError> {
    find_book(&state.book_service(), id)
}

/// POST /api/books
async fn add_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookPayload>,
) -> Json<Book> {
    create_book(&state.book_service(), payload)
}

/// PUT /api/books/:id
async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    ValidatedJson(payload): ValidatedJson<BookPayload>,
) -> Result<StatusCode, ApiError> {
    replace_book(&state.book_service(), id, payload)
}

/// DELETE /api/books/:id
async fn delete_book(State(state): State<AppState>, Path(id): Path<EntityId>) -> StatusCode {
    remove_book(&state.book_service(), id)
}

// ============================================================================
// TESTS
// ============================================================================
