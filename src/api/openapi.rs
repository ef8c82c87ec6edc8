//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, bundles, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Library catalog REST API: authors, books, bundles and ratings",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        authors::create_author_rating,
        authors::delete_author_rating,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::create_book_rating,
        books::delete_book_rating,
        // Bundles
        bundles::list_bundles,
        bundles::get_bundle,
        bundles::create_bundle,
        bundles::update_bundle,
        bundles::delete_bundle,
        bundles::attach_book,
        bundles::detach_book,
    ),
    components(
        schemas(
            crate::models::author::Author,
            crate::models::author::AuthorPayload,
            crate::models::book::BookWithAuthor,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::bundle::Bundle,
            crate::models::bundle::BundlePayload,
            crate::models::rating::Rating,
            crate::models::rating::RatingPayload,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management and their ratings"),
        (name = "books", description = "Book management and their ratings"),
        (name = "bundles", description = "Bundle management and book attachment")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
