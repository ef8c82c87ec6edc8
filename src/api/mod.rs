//! API handlers for the catalog REST endpoints

pub mod authors;
pub mod books;
pub mod bundles;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Query parameters shared by the show endpoints that support inclusion
#[derive(Debug, Default, Deserialize)]
pub struct IncludeParams {
    pub include: Option<String>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authors
        .route("/authors", get(authors::list_authors))
        .route("/authors", post(authors::create_author))
        .route("/authors/:id", get(authors::get_author))
        .route("/authors/:id", put(authors::update_author))
        .route("/authors/:id", delete(authors::delete_author))
        .route("/authors/:id/ratings", post(authors::create_author_rating))
        .route(
            "/authors/:id/ratings/:rating_id",
            delete(authors::delete_author_rating),
        )
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book))
        .route("/books/:id", delete(books::delete_book))
        .route("/books/:id/ratings", post(books::create_book_rating))
        .route(
            "/books/:id/ratings/:rating_id",
            delete(books::delete_book_rating),
        )
        // Bundles
        .route("/bundles", get(bundles::list_bundles))
        .route("/bundles", post(bundles::create_bundle))
        .route("/bundles/:id", get(bundles::get_bundle))
        .route("/bundles/:id", put(bundles::update_bundle))
        .route("/bundles/:id", delete(bundles::delete_bundle))
        .route(
            "/bundles/:bundle_id/books/:book_id",
            post(bundles::attach_book),
        )
        .route(
            "/bundles/:bundle_id/books/:book_id",
            delete(bundles::detach_book),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
