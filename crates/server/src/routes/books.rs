use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::{Book, CreateBookRequest, CreateBookResponse, MessageResponse, UpdateBookRequest};
use tracing::debug;

use crate::errors::ApiError;
use crate::extract::{decode_body, parse_id, path_segment};
use crate::routes::AppState;

/// GET /books
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.books.list().await)
}

/// GET /books/{name}, case-insensitive exact match.
pub async fn get_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let name = path_segment(path)?;
    debug!(%name, "lookup by name");
    state
        .books
        .find_by_name(&name)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Book not found".into()))
}

/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateBookResponse>), ApiError> {
    let input: CreateBookRequest = decode_body(&body)?;
    let book = state.books.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreateBookResponse::created(book))))
}

/// PUT /books/{id}. The id is checked before the body is decoded.
pub async fn update_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&path_segment(path)?)?;
    let input: UpdateBookRequest = decode_body(&body)?;
    let book = state.books.update(id, input).await?;
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&path_segment(path)?)?;
    state.books.delete(id).await?;
    Ok(Json(MessageResponse { message: "Book deleted".into() }))
}
