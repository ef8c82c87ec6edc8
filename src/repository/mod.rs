//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod bundles;
pub mod ratings;

use sqlx::{Pool, Sqlite};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub bundles: bundles::BundlesRepository,
    pub ratings: ratings::RatingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            bundles: bundles::BundlesRepository::new(pool.clone()),
            ratings: ratings::RatingsRepository::new(pool.clone()),
            pool,
        }
    }
}
