//! Books service

use validator::{ValidationError, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::{BookWithAuthor, CreateBook, NewBook, Rateable, Rating, RatingPayload, UpdateBook},
    repository::Repository,
};

fn add_invalid_author_id(errors: &mut ValidationErrors) {
    let mut err = ValidationError::new("exists");
    err.message = Some("The selected author id is invalid.".into());
    errors.add("author_id", err);
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookWithAuthor>> {
        self.repository.books.list().await
    }

    pub async fn get(&self, id: i64) -> AppResult<BookWithAuthor> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book. A dangling author_id reports in the same per-field
    /// map as the other validation errors.
    pub async fn create(&self, payload: CreateBook) -> AppResult<BookWithAuthor> {
        let dangling = match payload.author_id {
            Some(author_id) => !self.repository.authors.exists(author_id).await?,
            None => false,
        };
        match payload.validated() {
            Ok(data) if !dangling => self.repository.books.create(&data).await,
            Ok(_) => {
                let mut errors = ValidationErrors::new();
                add_invalid_author_id(&mut errors);
                Err(AppError::Validation(errors))
            }
            Err(mut errors) => {
                if dangling {
                    add_invalid_author_id(&mut errors);
                }
                Err(AppError::Validation(errors))
            }
        }
    }

    /// Update a book. Only fillable fields apply; an omitted author_id
    /// keeps the current one. The existence check still runs before
    /// validation so a missing book id is a 404 regardless of the body.
    pub async fn update(&self, id: i64, payload: UpdateBook) -> AppResult<BookWithAuthor> {
        let current = self.repository.books.get_by_id(id).await?;
        let dangling = match payload.author_id {
            Some(author_id) => !self.repository.authors.exists(author_id).await?,
            None => false,
        };
        match payload.validated() {
            Ok(changes) if !dangling => {
                let data = NewBook {
                    title: changes.title,
                    description: changes.description,
                    author_id: changes.author_id.unwrap_or(current.author_id),
                };
                self.repository.books.update(id, &data).await
            }
            Ok(_) => {
                let mut errors = ValidationErrors::new();
                add_invalid_author_id(&mut errors);
                Err(AppError::Validation(errors))
            }
            Err(mut errors) => {
                if dangling {
                    add_invalid_author_id(&mut errors);
                }
                Err(AppError::Validation(errors))
            }
        }
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    /// Create a rating scoped to a book
    pub async fn create_rating(&self, book_id: i64, payload: RatingPayload) -> AppResult<Rating> {
        let book = self.repository.books.get_by_id(book_id).await?;
        let value = payload.validated().map_err(AppError::Validation)?;
        self.repository
            .ratings
            .create(book.rateable_ref(), value)
            .await
    }

    /// Delete a rating scoped to a book
    pub async fn delete_rating(&self, book_id: i64, rating_id: i64) -> AppResult<()> {
        let book = self.repository.books.get_by_id(book_id).await?;
        self.repository
            .ratings
            .delete(book.rateable_ref(), rating_id)
            .await
    }
}
