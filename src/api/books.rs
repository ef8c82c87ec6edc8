//! Book endpoints

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::{CreateBook, RatingPayload, UpdateBook},
    transform::{BookTransformer, RatingTransformer},
};

/// List all books; each book carries its author's name
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Envelope with the array of transformed books")
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Value>> {
    let books = state.services.books.list().await?;
    Ok(Json(state.formatter.collection(&books, &BookTransformer)))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Envelope with the transformed book"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(state.formatter.item(&book, &BookTransformer)))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created; Location points at the new resource"),
        (status = 422, description = "Per-field validation errors")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    body: Option<Json<CreateBook>>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Value>)> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let book = state.services.books.create(payload).await?;
    let location = format!("/books/{}", book.id);
    let envelope = state.formatter.item(&book, &BookTransformer);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(envelope),
    ))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Envelope with the updated book"),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Per-field validation errors")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    body: Option<Json<UpdateBook>>,
) -> AppResult<Json<Value>> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let book = state.services.books.update(id, payload).await?;
    Ok(Json(state.formatter.item(&book, &BookTransformer)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a rating under a book
#[utoipa::path(
    post,
    path = "/books/{id}/ratings",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = RatingPayload,
    responses(
        (status = 201, description = "Envelope with the created rating"),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Per-field validation errors")
    )
)]
pub async fn create_book_rating(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    body: Option<Json<RatingPayload>>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let rating = state.services.books.create_rating(id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(state.formatter.item(&rating, &RatingTransformer)),
    ))
}

/// Delete a rating under a book
#[utoipa::path(
    delete,
    path = "/books/{id}/ratings/{rating_id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID"),
        ("rating_id" = i64, Path, description = "Rating ID")
    ),
    responses(
        (status = 204, description = "Rating deleted"),
        (status = 404, description = "Book or rating not found")
    )
)]
pub async fn delete_book_rating(
    State(state): State<crate::AppState>,
    Path((id, rating_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.services.books.delete_rating(id, rating_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
