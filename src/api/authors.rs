//! Author endpoints, including the author-scoped rating sub-resource

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::{AuthorPayload, RatingPayload},
    transform::{AuthorResource, AuthorTransformer, IncludeSet, RatingTransformer},
};

use super::IncludeParams;

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Envelope with the array of transformed authors")
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Value>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(state.formatter.collection(&authors, &AuthorTransformer)))
}

/// Get author by ID, optionally including their books
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID"),
        ("include" = Option<String>, Query, description = "Comma-separated relations to include (books)")
    ),
    responses(
        (status = 200, description = "Envelope with the transformed author"),
        (status = 400, description = "Unknown include name"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Query(params): Query<IncludeParams>,
) -> AppResult<Json<Value>> {
    let includes = IncludeSet::parse(params.include.as_deref(), AuthorTransformer::INCLUDES)?;
    let author = state.services.authors.get(id, &includes).await?;
    Ok(Json(state.formatter.item(&author, &AuthorTransformer)))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorPayload,
    responses(
        (status = 201, description = "Author created; Location points at the new resource"),
        (status = 422, description = "Per-field validation errors")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    body: Option<Json<AuthorPayload>>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Value>)> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let author = state.services.authors.create(payload).await?;
    let location = format!("/authors/{}", author.id);
    let envelope = state
        .formatter
        .item(&AuthorResource::new(author), &AuthorTransformer);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(envelope),
    ))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = AuthorPayload,
    responses(
        (status = 200, description = "Envelope with the updated author"),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Per-field validation errors")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    body: Option<Json<AuthorPayload>>,
) -> AppResult<Json<Value>> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let author = state.services.authors.update(id, payload).await?;
    Ok(Json(
        state
            .formatter
            .item(&AuthorResource::new(author), &AuthorTransformer),
    ))
}

/// Delete an author and, atomically, their books and ratings
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a rating under an author
#[utoipa::path(
    post,
    path = "/authors/{id}/ratings",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = RatingPayload,
    responses(
        (status = 201, description = "Envelope with the created rating"),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Per-field validation errors")
    )
)]
pub async fn create_author_rating(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    body: Option<Json<RatingPayload>>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let rating = state.services.authors.create_rating(id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(state.formatter.item(&rating, &RatingTransformer)),
    ))
}

/// Delete a rating under an author
#[utoipa::path(
    delete,
    path = "/authors/{id}/ratings/{rating_id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID"),
        ("rating_id" = i64, Path, description = "Rating ID")
    ),
    responses(
        (status = 204, description = "Rating deleted"),
        (status = 404, description = "Author or rating not found")
    )
)]
pub async fn delete_author_rating(
    State(state): State<crate::AppState>,
    Path((id, rating_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.services.authors.delete_rating(id, rating_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
