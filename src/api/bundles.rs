//! Bundle endpoints, including attach/detach of books

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::BundlePayload,
    transform::{BundleResource, BundleTransformer, IncludeSet},
};

use super::IncludeParams;

/// List all bundles
#[utoipa::path(
    get,
    path = "/bundles",
    tag = "bundles",
    responses(
        (status = 200, description = "Envelope with the array of transformed bundles")
    )
)]
pub async fn list_bundles(State(state): State<crate::AppState>) -> AppResult<Json<Value>> {
    let bundles = state.services.bundles.list().await?;
    Ok(Json(state.formatter.collection(&bundles, &BundleTransformer)))
}

/// Get bundle by ID, optionally including its books
#[utoipa::path(
    get,
    path = "/bundles/{id}",
    tag = "bundles",
    params(
        ("id" = i64, Path, description = "Bundle ID"),
        ("include" = Option<String>, Query, description = "Comma-separated relations to include (books)")
    ),
    responses(
        (status = 200, description = "Envelope with the transformed bundle"),
        (status = 400, description = "Unknown include name"),
        (status = 404, description = "Bundle not found")
    )
)]
pub async fn get_bundle(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Query(params): Query<IncludeParams>,
) -> AppResult<Json<Value>> {
    let includes = IncludeSet::parse(params.include.as_deref(), BundleTransformer::INCLUDES)?;
    let bundle = state.services.bundles.get(id, &includes).await?;
    Ok(Json(state.formatter.item(&bundle, &BundleTransformer)))
}

/// Create a bundle
#[utoipa::path(
    post,
    path = "/bundles",
    tag = "bundles",
    request_body = BundlePayload,
    responses(
        (status = 201, description = "Bundle created; Location points at the new resource"),
        (status = 422, description = "Per-field validation errors")
    )
)]
pub async fn create_bundle(
    State(state): State<crate::AppState>,
    body: Option<Json<BundlePayload>>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Value>)> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let bundle = state.services.bundles.create(payload).await?;
    let location = format!("/bundles/{}", bundle.id);
    let envelope = state
        .formatter
        .item(&BundleResource::new(bundle), &BundleTransformer);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(envelope),
    ))
}

/// Update a bundle
#[utoipa::path(
    put,
    path = "/bundles/{id}",
    tag = "bundles",
    params(("id" = i64, Path, description = "Bundle ID")),
    request_body = BundlePayload,
    responses(
        (status = 200, description = "Envelope with the updated bundle"),
        (status = 404, description = "Bundle not found"),
        (status = 422, description = "Per-field validation errors")
    )
)]
pub async fn update_bundle(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    body: Option<Json<BundlePayload>>,
) -> AppResult<Json<Value>> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let bundle = state.services.bundles.update(id, payload).await?;
    Ok(Json(
        state
            .formatter
            .item(&BundleResource::new(bundle), &BundleTransformer),
    ))
}

/// Delete a bundle; attached books keep their own lifecycle
#[utoipa::path(
    delete,
    path = "/bundles/{id}",
    tag = "bundles",
    params(("id" = i64, Path, description = "Bundle ID")),
    responses(
        (status = 204, description = "Bundle deleted"),
        (status = 404, description = "Bundle not found")
    )
)]
pub async fn delete_bundle(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.bundles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Attach a book to a bundle
#[utoipa::path(
    post,
    path = "/bundles/{bundle_id}/books/{book_id}",
    tag = "bundles",
    params(
        ("bundle_id" = i64, Path, description = "Bundle ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Envelope with the bundle the book was attached to"),
        (status = 404, description = "Bundle or book not found")
    )
)]
pub async fn attach_book(
    State(state): State<crate::AppState>,
    Path((bundle_id, book_id)): Path<(i64, i64)>,
) -> AppResult<Json<Value>> {
    let bundle = state.services.bundles.attach_book(bundle_id, book_id).await?;
    Ok(Json(state.formatter.item(&bundle, &BundleTransformer)))
}

/// Detach a book from a bundle
#[utoipa::path(
    delete,
    path = "/bundles/{bundle_id}/books/{book_id}",
    tag = "bundles",
    params(
        ("bundle_id" = i64, Path, description = "Bundle ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Association removed; both records remain"),
        (status = 404, description = "Bundle or book not found")
    )
)]
pub async fn detach_book(
    State(state): State<crate::AppState>,
    Path((bundle_id, book_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.services.bundles.detach_book(bundle_id, book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
