//! Library Catalog API Server
//!
//! A REST JSON API for managing a catalog of authors, books, bundles and
//! polymorphic ratings, serialized through a resource-transformation layer.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod response;
pub mod services;
pub mod transform;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use response::ResponseFormatter;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Shared formatter so every endpoint emits the same envelope shape
    pub formatter: ResponseFormatter,
}
