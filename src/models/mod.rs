//! Data models for the catalog

pub mod author;
pub mod book;
pub mod bundle;
pub mod rating;

// Re-export commonly used types
pub use author::{Author, AuthorPayload, NewAuthor};
pub use book::{BookChanges, BookWithAuthor, CreateBook, NewBook, UpdateBook};
pub use bundle::{Bundle, BundlePayload, NewBundle};
pub use rating::{Rateable, RateableKind, RateableRef, Rating, RatingPayload};
